//! Export command

use std::io::Write;
use std::path::PathBuf;

#[cfg(unix)]
use std::os::unix::fs::OpenOptionsExt;

use clap::Args;
use serde::Serialize;

use crate::output::to_json;
use crate::{AppContext, Cli};
use kinship_core::{ParseStats, RecordIssue, Registry};

#[derive(Args)]
pub struct ExportArgs {
    /// Output file (stdout if omitted)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include parse statistics and skipped-record notes
    #[arg(long)]
    pub with_stats: bool,
}

/// Export document wrapping the parsed registry
#[derive(Debug, Serialize)]
pub struct ExportData<'a> {
    pub version: &'static str,
    pub tree: &'a Registry,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<&'a ParseStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<&'a [RecordIssue]>,
}

pub fn run_export(args: &ExportArgs, cli: &Cli, ctx: &AppContext) -> anyhow::Result<()> {
    let outcome = ctx.load_tree(cli)?;

    let export = ExportData {
        version: "1.0",
        tree: &outcome.registry,
        stats: args.with_stats.then_some(&outcome.stats),
        issues: args.with_stats.then_some(outcome.issues.as_slice()),
    };
    let content = to_json(&export)?;

    if let Some(ref path) = args.output {
        // Family data stays private: owner read/write only
        #[cfg(unix)]
        {
            let mut file = std::fs::OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .mode(0o600)
                .open(path)?;
            file.write_all(content.as_bytes())?;
        }
        #[cfg(not(unix))]
        {
            std::fs::write(path, &content)?;
        }
        tracing::info!(
            "Exported {} persons and {} families to {:?}",
            outcome.stats.persons,
            outcome.stats.families,
            path
        );
        if !cli.quiet {
            println!("Exported to {:?}", path);
        }
    } else {
        println!("{}", content);
    }

    Ok(())
}
