//! Info command: every person and family in the tree

use crate::output::{banner, to_json, OutputFormat};
use crate::{AppContext, Cli};

pub fn run(cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let outcome = ctx.load_tree(cli)?;
    let registry = &outcome.registry;

    if ctx.format == OutputFormat::Json {
        println!("{}", to_json(registry)?);
        return Ok(());
    }

    println!("{}", banner("Persons"));
    for person in registry.persons() {
        println!("{}:{}", person.id, person);
    }
    println!();

    println!("{}", banner("Families"));
    for family in registry.families() {
        println!("{}:{}", family.id, family);
    }
    println!();

    if !cli.quiet {
        println!(
            "{} persons, {} families, {} lines read",
            outcome.stats.persons, outcome.stats.families, outcome.stats.lines_read
        );
        for issue in &outcome.issues {
            println!("  skipped: {}", issue);
        }
    }
    Ok(())
}
