use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use shelf_editor::BuilderStore;
use shelf_model::StoreRecord;
use shelf_workspace::Workspace;
use std::fs;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Subdomain the storefront is served under
    pub subdomain: String,

    /// Store id (defaults to the subdomain)
    #[arg(long)]
    pub store_id: Option<String>,

    /// Display name (defaults to the subdomain)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Owning user id
    #[arg(long, default_value = "local")]
    pub user_id: String,

    /// Data directory
    #[arg(short, long, default_value = ".shelf")]
    pub data_dir: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    println!("{}", "📝 Initializing Shelf store...".bright_blue().bold());

    let config = if config_path.exists() && !args.force {
        println!(
            "  {} {} already exists, keeping it",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        Config::load(cwd)?
    } else {
        let config = Config {
            data_dir: args.data_dir.clone(),
            ..Config::default()
        };
        fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
        println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
        config
    };

    let workspace = Workspace::open(config.get_data_dir(cwd))?;
    let store_id = args.store_id.unwrap_or_else(|| args.subdomain.clone());

    if workspace.store().get_store(&store_id)?.is_some() {
        println!("  {} Store {} already exists", "⚠️".yellow(), store_id.bright_white());
    } else {
        let name = args.name.unwrap_or_else(|| args.subdomain.clone());
        let store = StoreRecord::new(&store_id, args.user_id, name, &args.subdomain);
        workspace.store().put_store(&store)?;
        info!(store_id = %store_id, subdomain = %args.subdomain, "Created store record");
        println!("  {} Created store {}", "✓".green(), store_id);
    }

    println!();
    println!("{}", "✅ Store initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: shelf add {} hero", store_id);
    println!("  2. Run: shelf publish {}", store_id);
    println!("  3. Run: shelf render {}", args.subdomain);

    Ok(())
}
