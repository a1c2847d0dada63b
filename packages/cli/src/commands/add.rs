use crate::commands::report;
use crate::config::Config;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use shelf_model::SectionType;
use shelf_workspace::Workspace;
use tracing::info;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Store whose draft is edited
    pub store_id: String,

    /// Section type to add (see `shelf components`)
    pub section_type: String,
}

/// Append a section to the store's working document and save it as a draft.
/// The working document is the saved draft, or the published document when
/// no draft is pending.
pub fn add(args: AddArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let workspace = Workspace::open(config.get_data_dir(cwd))?;
    let mut session = workspace.resume_session(&args.store_id, config.max_history)?;

    let section_type = SectionType::from(args.section_type.as_str());
    let result = session.add_component(&section_type).and_then(|id| {
        session.save_draft()?;
        Ok(id)
    });
    report(&mut session);

    let id = result?;
    info!(store_id = %args.store_id, section_id = %id, %section_type, "Added section");
    println!("  {} Section id {}", "→".bright_blue(), id.bright_white());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{publish, PublishArgs};
    use shelf_editor::BuilderStore;
    use shelf_model::StoreRecord;
    use tempfile::TempDir;

    fn add_section(cwd: &str, section_type: &str) {
        add(
            AddArgs {
                store_id: "tees".to_string(),
                section_type: section_type.to_string(),
            },
            cwd,
        )
        .unwrap();
    }

    #[test]
    fn test_adds_after_publish_build_on_the_draft() {
        let dir = TempDir::new().unwrap();
        let cwd = dir.path().display().to_string();
        let config = Config::default();
        Workspace::open(config.get_data_dir(&cwd))
            .unwrap()
            .store()
            .put_store(&StoreRecord::new("tees", "local", "Tees", "tees"))
            .unwrap();

        add_section(&cwd, "text");
        publish(
            PublishArgs {
                store_id: "tees".to_string(),
            },
            &cwd,
        )
        .unwrap();
        add_section(&cwd, "hero");
        add_section(&cwd, "newsletter");

        let workspace = Workspace::open(config.get_data_dir(&cwd)).unwrap();
        let draft = workspace.store().load_draft("tees").unwrap().unwrap();
        let types: Vec<SectionType> = draft.pages[0]
            .sections
            .iter()
            .map(|s| s.section_type.clone())
            .collect();
        assert_eq!(
            types,
            vec![SectionType::Text, SectionType::Hero, SectionType::Newsletter]
        );
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let dir = TempDir::new().unwrap();
        let cwd = dir.path().display().to_string();
        let result = add(
            AddArgs {
                store_id: "tees".to_string(),
                section_type: "carousel3d".to_string(),
            },
            &cwd,
        );
        assert!(result.is_err());
    }
}
