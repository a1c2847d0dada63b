use anyhow::Result;
use clap::Args;
use colored::Colorize;
use shelf_model::{Category, ComponentDefinition, ComponentRegistry, PageKind};

#[derive(Debug, Args)]
pub struct ComponentsArgs {
    /// Only list one category (layout, content, commerce, marketing)
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only list components available on a page kind (home, product)
    #[arg(short, long)]
    pub page: Option<String>,

    /// Print definitions as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn components(args: ComponentsArgs, _cwd: &str) -> Result<()> {
    let registry = ComponentRegistry::builtin();
    let definitions = select(&registry, args.category.as_deref(), args.page.as_deref())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&definitions)?);
        return Ok(());
    }

    for definition in &definitions {
        println!(
            "  {:<24} {:<10} {}",
            definition.section_type.as_str().bright_white(),
            format!("{:?}", definition.category).to_lowercase().cyan(),
            definition.description
        );
    }
    println!();
    println!("{} components", definitions.len());

    Ok(())
}

fn select<'r>(
    registry: &'r ComponentRegistry,
    category: Option<&str>,
    page: Option<&str>,
) -> Result<Vec<&'r ComponentDefinition>> {
    let mut definitions: Vec<&ComponentDefinition> = match page {
        Some(page) => registry.list_available_for(page.parse::<PageKind>()?),
        None => registry.list_all().iter().collect(),
    };

    if let Some(category) = category {
        let category: Category = category.parse()?;
        definitions.retain(|def| def.category == category);
    }

    Ok(definitions)
}
