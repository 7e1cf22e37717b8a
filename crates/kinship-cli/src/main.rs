//! Kinship CLI - Command line interface for GEDCOM family trees

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{chart, completions, info, io, relation};
use config::Config;
use kinship_core::ParseOutcome;
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "kinship")]
#[command(author, version, about = "Explore family trees stored in GEDCOM files")]
pub struct Cli {
    /// GEDCOM file to read (defaults to `default_file` from the config)
    #[arg(short = 'i', long = "file", global = true)]
    pub file: Option<PathBuf>,

    /// Config file path
    #[arg(long, global = true, env = "KINSHIP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format: table, json
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the config file path
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(config::default_config_path)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List every person and family in the file
    Info,
    /// Print the descendant chart of a person
    Descendants(chart::DescendantsArgs),
    /// Print the ancestor chart of a person
    Ancestors(chart::AncestorsArgs),
    /// List the Nth cousins of a person
    Cousins(relation::CousinsArgs),
    /// Check whether one person descends from another
    IsDescendant(relation::IsDescendantArgs),
    /// Export the parsed tree as JSON
    Export(io::ExportArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context shared by the tree commands
pub struct AppContext {
    pub config: Config,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let config_path = cli.config_path();
        tracing::debug!("Using config at: {:?}", config_path);

        let config = Config::load(&config_path)?;
        let format = cli
            .format
            .as_deref()
            .or(config.format.as_deref())
            .map(OutputFormat::from)
            .unwrap_or(OutputFormat::Table);

        Ok(Self { config, format })
    }

    /// Parse the GEDCOM file named on the command line or in the config
    pub fn load_tree(&self, cli: &Cli) -> anyhow::Result<ParseOutcome> {
        let Some(path) = cli.file.as_ref().or(self.config.default_file.as_ref()) else {
            anyhow::bail!("No GEDCOM file given. Pass --file or set default_file in the config.");
        };

        tracing::info!("Reading {:?}", path);
        let outcome = kinship_core::parse_file(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;

        if outcome.registry.is_empty() {
            tracing::warn!("No records found in {}", path.display());
        }
        if !outcome.issues.is_empty() {
            tracing::warn!(
                "{} record(s) in {} were only partly read",
                outcome.issues.len(),
                path.display()
            );
        }
        tracing::info!(
            "Loaded {} persons and {} families",
            outcome.stats.persons,
            outcome.stats.families
        );
        Ok(outcome)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting kinship CLI");

    match &cli.command {
        Commands::Config(args) => return commands::config::run(args, &cli.config_path()),
        Commands::Completions(args) => return completions::run(args),
        _ => {}
    }

    let ctx = AppContext::new(&cli)?;

    match &cli.command {
        Commands::Info => info::run(&cli, &ctx)?,
        Commands::Descendants(args) => chart::run_descendants(args, &cli, &ctx)?,
        Commands::Ancestors(args) => chart::run_ancestors(args, &cli, &ctx)?,
        Commands::Cousins(args) => relation::run_cousins(args, &cli, &ctx)?,
        Commands::IsDescendant(args) => relation::run_is_descendant(args, &cli, &ctx)?,
        Commands::Export(args) => io::run_export(args, &cli, &ctx)?,
        Commands::Config(_) | Commands::Completions(_) => {}
    }

    Ok(())
}
