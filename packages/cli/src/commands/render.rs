use crate::config::Config;
use anyhow::Result;
use clap::Args;
use shelf_workspace::Workspace;

#[derive(Debug, Args)]
pub struct RenderArgs {
    /// Storefront subdomain
    pub subdomain: String,

    /// Route to render (defaults to `defaultRoute` from the config)
    #[arg(short, long)]
    pub route: Option<String>,
}

/// Print the storefront view for a route as JSON
pub fn render(args: RenderArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let workspace = Workspace::open(config.get_data_dir(cwd))?;
    let route = args.route.unwrap_or(config.default_route);

    let view = workspace.host().render(&args.subdomain, &route)?;
    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
