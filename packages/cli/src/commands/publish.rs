use crate::commands::report;
use crate::config::Config;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use shelf_editor::{Action, BuilderStore};
use shelf_workspace::Workspace;
use tracing::info;

#[derive(Debug, Args)]
pub struct PublishArgs {
    /// Store whose saved draft is published
    pub store_id: String,
}

pub fn publish(args: PublishArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let workspace = Workspace::open(config.get_data_dir(cwd))?;

    let Some(draft) = workspace.store().load_draft(&args.store_id)? else {
        bail!("No saved draft for store {}", args.store_id);
    };

    let mut session = workspace.session(&args.store_id, config.max_history);
    session.dispatch(Action::LoadBuilder {
        builder: Box::new(draft),
    })?;

    let result = session.publish();
    report(&mut session);
    let store = result?;

    let pages = store.builder.as_ref().map_or(0, |builder| builder.pages.len());
    info!(store_id = %store.id, pages, "Published from CLI");
    println!();
    println!(
        "{} {} is live ({} pages)",
        "✅".green(),
        store.store_name.bright_white().bold(),
        pages
    );
    Ok(())
}
