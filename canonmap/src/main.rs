//! Canonical type mapping from the command line.
//!
//! Maps a JSON list of column descriptors for one dialect, lists the
//! registered dialects, and checks mapping configuration files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use canonmap_core::{
    ColumnDescriptor, DialectId, DialectRegistry, FailureMode, MappingConfig, init_logging,
    map_columns,
};
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

/// Command-line interface for canonical type mapping
#[derive(Parser)]
#[command(name = "canonmap")]
#[command(about = "Canonical type mapping for database column metadata")]
#[command(version)]
#[command(long_about = "
canonmap - map vendor column types to canonical types

Reads column metadata as a JSON array of objects with the fields
type_name, precision, scale and column_name, and prints the canonical
schema as JSON.

SUPPORTED DIALECTS:
- dolphindb
- postgresql (postgres)
- mysql (mariadb)

EXAMPLES:
  canonmap map --dialect dolphindb --input columns.json
  canonmap map --dialect jdbc:dolphindb://localhost:8848 --input columns.json --collect-all
  canonmap dialects
  canonmap check-config mapping.json
")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand)]
pub enum Command {
    /// Map a column list to its canonical schema
    Map(MapArgs),
    /// List registered dialects and their vendor type identifiers
    Dialects {
        /// Mapping configuration file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
    /// Load, validate and resolve a mapping configuration file
    CheckConfig {
        /// Mapping configuration file
        #[arg(value_name = "FILE")]
        config: PathBuf,
    },
}

/// Arguments for `canonmap map`
#[derive(Args)]
pub struct MapArgs {
    /// Dialect token or connection URL
    #[arg(short, long, help = "Dialect token (e.g. dolphindb) or connection URL")]
    pub dialect: String,

    /// Column list
    #[arg(short, long, value_name = "FILE", help = "JSON array of column descriptors")]
    pub input: PathBuf,

    /// Mapping configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Report every unmappable column instead of stopping at the first
    #[arg(long)]
    pub collect_all: bool,
}

/// Flags accepted by every command
#[derive(Args)]
pub struct GlobalArgs {
    /// Increase verbosity
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Suppress output
    #[arg(
        short,
        long,
        global = true,
        help = "Suppress all log output except errors"
    )]
    pub quiet: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.global.verbose, cli.global.quiet)?;

    let output = match &cli.command {
        Command::Map(args) => map_command(args),
        Command::Dialects { config } => dialects_command(config.as_deref()),
        Command::CheckConfig { config } => check_config_command(config),
    }
    .inspect_err(|e| error!("{:#}", e))?;

    println!("{}", output);
    Ok(())
}

/// Loads the configuration file, or the default configuration.
fn load_config(path: Option<&Path>) -> anyhow::Result<MappingConfig> {
    match path {
        Some(path) => MappingConfig::from_file(path)
            .with_context(|| format!("Invalid configuration {}", path.display())),
        None => Ok(MappingConfig::default()),
    }
}

/// Accepts a plain dialect token or a connection URL.
fn parse_dialect(value: &str) -> anyhow::Result<DialectId> {
    if value.contains("://") {
        Ok(DialectId::from_connection_url(value)?)
    } else {
        Ok(value.parse::<DialectId>()?)
    }
}

fn map_command(args: &MapArgs) -> anyhow::Result<String> {
    let config = load_config(args.config.as_deref())?;
    let registry = DialectRegistry::from_config(&config)?;

    let dialect = parse_dialect(&args.dialect)?;
    let mapper = registry.lookup(dialect)?;

    let contents = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let columns: Vec<ColumnDescriptor> = serde_json::from_str(&contents)
        .with_context(|| format!("Malformed column list in {}", args.input.display()))?;

    let failure_mode = if args.collect_all {
        FailureMode::CollectAll
    } else {
        config.failure_mode
    };
    info!(%dialect, columns = columns.len(), ?failure_mode, "Mapping column list");

    let report = map_columns(mapper.as_ref(), &columns, failure_mode)?;
    if !report.is_complete() {
        // Every failure is printed before exiting non-zero
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    let schema = report.into_schema()?;
    Ok(serde_json::to_string_pretty(&schema)?)
}

fn dialects_command(config: Option<&Path>) -> anyhow::Result<String> {
    let config = load_config(config)?;
    let registry = DialectRegistry::from_config(&config)?;

    let mut lines = Vec::new();
    for dialect in registry.dialects() {
        let mapper = registry.lookup(dialect)?;
        lines.push(format!(
            "{}: {}",
            dialect,
            mapper.vendor_type_names().join(", ")
        ));
    }
    Ok(lines.join("\n"))
}

fn check_config_command(path: &Path) -> anyhow::Result<String> {
    let config = load_config(Some(path))?;
    let registry = DialectRegistry::from_config(&config)?;
    registry.ensure_supported(&config.enabled_dialects)?;

    let dialects: Vec<&str> = registry.dialects().into_iter().map(DialectId::as_str).collect();
    Ok(format!(
        "Configuration OK: dialects [{}], failure mode {:?}",
        dialects.join(", "),
        config.failure_mode
    ))
}
