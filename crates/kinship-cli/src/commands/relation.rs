//! Cousin and descent queries

use clap::Args;
use serde::Serialize;

use crate::output::{to_json, OutputFormat};
use crate::{AppContext, Cli};
use kinship_core::{ordinal_suffix, RelationshipEngine};

#[derive(Args)]
pub struct CousinsArgs {
    /// Person id (e.g. I1)
    pub id: String,
    /// Cousin degree: 1 for first cousins, 2 for second cousins, ...
    #[arg(short = 'n', long)]
    pub degree: Option<u32>,
}

#[derive(Args)]
pub struct IsDescendantArgs {
    /// Possible ancestor
    pub ancestor: String,
    /// Possible descendant
    pub candidate: String,
}

#[derive(Serialize)]
struct CousinReport<'a> {
    person: &'a str,
    degree: u32,
    cousins: &'a [String],
}

#[derive(Serialize)]
struct DescentReport<'a> {
    ancestor: &'a str,
    candidate: &'a str,
    is_descendant: bool,
}

pub fn run_cousins(args: &CousinsArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let registry = ctx.load_tree(cli)?.into_registry();
    let engine = RelationshipEngine::new(&registry);
    let person = registry.person(&args.id)?;

    let degree = args.degree.or(ctx.config.cousin_degree).unwrap_or(1);
    let cousins = engine.nth_cousins(&args.id, degree)?;
    tracing::info!("Found {} degree {} cousins for {}", cousins.len(), degree, args.id);

    if ctx.format == OutputFormat::Json {
        let report = CousinReport {
            person: &args.id,
            degree,
            cousins: &cousins,
        };
        println!("{}", to_json(&report)?);
        return Ok(());
    }

    println!(
        "{}{} cousins for {}",
        degree,
        ordinal_suffix(degree),
        person.display_name()
    );
    if cousins.is_empty() {
        println!("No cousins");
    }
    for id in &cousins {
        println!("{}", registry.person(id)?.chart_label());
    }
    Ok(())
}

pub fn run_is_descendant(args: &IsDescendantArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let registry = ctx.load_tree(cli)?.into_registry();
    let engine = RelationshipEngine::new(&registry);
    if !registry.contains_person(&args.candidate) {
        anyhow::bail!("Person not found: {}", args.candidate);
    }

    let is_descendant = engine.is_descendant(&args.ancestor, &args.candidate)?;

    if ctx.format == OutputFormat::Json {
        let report = DescentReport {
            ancestor: &args.ancestor,
            candidate: &args.candidate,
            is_descendant,
        };
        println!("{}", to_json(&report)?);
    } else {
        println!("{}", is_descendant);
    }
    Ok(())
}
