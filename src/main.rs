//! Pokedex-Notion main entry point
//!
//! This is the command-line interface for the Pokédex-to-Notion pipeline.

use anyhow::Context;
use clap::Parser;
use pokedex_notion::config::{load_config_with_hash, validate, Config, Credentials};
use pokedex_notion::output::print_report;
use pokedex_notion::Pipeline;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Placeholder parent id used by dry runs without a configured database
const DRY_RUN_DATABASE_ID: &str = "00000000-0000-0000-0000-000000000000";

/// Pokedex-Notion: publish Pokédex entries into a Notion database
///
/// Fetches a range of Pokémon from PokeAPI, enriches each with its species
/// entry, and creates one page per Pokémon in the Notion database named by
/// NOTION_DATABASE_ID, authenticating with NOTION_KEY.
#[derive(Parser, Debug)]
#[command(name = "pokedex-notion")]
#[command(version)]
#[command(about = "Publish Pokédex entries into a Notion database", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults apply when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// First identifier to fetch (overrides the config file)
    #[arg(long)]
    start: Option<u32>,

    /// Last identifier to fetch, inclusive (overrides the config file)
    #[arg(long)]
    end: Option<u32>,

    /// Print page requests as JSON instead of sending them to Notion
    #[arg(long)]
    dry_run: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Values from .env become ordinary environment variables
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet);

    let config = load(&cli)?;

    let pipeline = if cli.dry_run {
        let database_id = Credentials::from_env(&config.notion)
            .map(|creds| creds.database_id)
            .unwrap_or_else(|_| DRY_RUN_DATABASE_ID.to_string());
        tracing::info!("Dry run: page requests will be printed, not sent");
        Pipeline::dry_run(config, database_id)?
    } else {
        let credentials = Credentials::from_env(&config.notion)
            .context("Notion credentials are required unless --dry-run is given")?;
        tracing::info!("Publishing to database {}", credentials.database_id);
        Pipeline::new(config, credentials)?
    };

    run(pipeline, cli.quiet).await
}

/// Loads the config file (if any), applies CLI overrides, and validates the result
fn load(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using defaults");
            Config::default()
        }
    };

    config.source.override_range(cli.start, cli.end);

    // The file is validated only here, once the overrides are applied
    validate(&config).context("Invalid configuration")?;
    Ok(config)
}

/// Runs the pipeline and prints its report
async fn run(mut pipeline: Pipeline, quiet: bool) -> anyhow::Result<()> {
    let report = pipeline.run().await?;

    if !quiet {
        print_report(&report).context("Failed to write run report")?;
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pokedex_notion=info,warn"),
            1 => EnvFilter::new("pokedex_notion=debug,info"),
            2 => EnvFilter::new("pokedex_notion=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // Logs go to stderr so dry-run JSON on stdout stays clean
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
