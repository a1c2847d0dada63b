mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    add, components, init, publish, render, AddArgs, ComponentsArgs, InitArgs, PublishArgs,
    RenderArgs,
};
use config::Config;
use tracing_subscriber::EnvFilter;

/// Shelf CLI - storefront page builder
#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the config file and a store record
    Init(InitArgs),

    /// List the section types the builder offers
    Components(ComponentsArgs),

    /// Add a section to a store's draft
    Add(AddArgs),

    /// Publish a store's saved draft
    Publish(PublishArgs),

    /// Render a storefront route as JSON
    Render(RenderArgs),
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?.display().to_string();
    let config = Config::load(&cwd)?;
    init_logging(&config.log_level);

    match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Components(args) => components(args, &cwd),
        Command::Add(args) => add(args, &cwd),
        Command::Publish(args) => publish(args, &cwd),
        Command::Render(args) => render(args, &cwd),
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
