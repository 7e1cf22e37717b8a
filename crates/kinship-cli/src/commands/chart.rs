//! Descendant and ancestor chart commands

use clap::Args;

use crate::output::{to_json, OutputFormat};
use crate::{AppContext, Cli};
use kinship_core::RelationshipEngine;

#[derive(Args)]
pub struct DescendantsArgs {
    /// Person id (e.g. I1)
    pub id: String,
    /// Print the flat list of descendant ids instead of the chart
    #[arg(long)]
    pub list: bool,
}

#[derive(Args)]
pub struct AncestorsArgs {
    /// Person id (e.g. I1)
    pub id: String,
}

pub fn run_descendants(args: &DescendantsArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let registry = ctx.load_tree(cli)?.into_registry();
    let engine = RelationshipEngine::new(&registry);
    let person = registry.person(&args.id)?;

    let lines = if args.list {
        engine.descendants(&args.id)?
    } else {
        engine.descendant_chart(&args.id)?
    };
    tracing::info!("{} descendant lines for {}", lines.len(), args.id);

    if ctx.format == OutputFormat::Json {
        println!("{}", to_json(&lines)?);
        return Ok(());
    }

    if !cli.quiet {
        println!("Descendants of {}:", person.display_name());
    }
    for line in &lines {
        println!("{}", line);
    }
    Ok(())
}

pub fn run_ancestors(args: &AncestorsArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let registry = ctx.load_tree(cli)?.into_registry();
    let engine = RelationshipEngine::new(&registry);
    let person = registry.person(&args.id)?;

    let lines = engine.ancestor_chart(&args.id)?;

    if ctx.format == OutputFormat::Json {
        println!("{}", to_json(&lines)?);
        return Ok(());
    }

    if !cli.quiet {
        println!("Ancestors of {}:", person.display_name());
    }
    for line in &lines {
        println!("{}", line);
    }
    Ok(())
}
