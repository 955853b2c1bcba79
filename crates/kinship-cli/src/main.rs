//! Kinship CLI - Work out how people in a family tree are related.

use clap::Parser;
use kinship_cli::commands;
use kinship_cli::{Cli, CliError, Command, Config, Formatter, Snapshot};
use kinship_resolver::{FamilyGraph, KinshipResolver};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> kinship_cli::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing (log to stderr); RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    // An explicit --config must load; the default path falls back to defaults
    let config = match &cli.config {
        Some(path) => Config::load_from(Path::new(path))?,
        None => Config::load().unwrap_or_else(|e| {
            warn!(error = %e, "Ignoring unreadable configuration");
            Config::default()
        }),
    };

    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Init(args) => {
            let path = match &cli.config {
                Some(path) => PathBuf::from(path),
                None => Config::path()?,
            };
            commands::execute_init(args, &path, cli.snapshot, &formatter)
        }
        command => run_query(command, cli.snapshot, &config, &formatter),
    }
}

/// Commands that need a family snapshot
fn run_query(
    command: Command,
    snapshot: Option<String>,
    config: &Config,
    formatter: &Formatter,
) -> kinship_cli::Result<()> {
    let source = snapshot
        .or_else(|| config.settings.snapshot.clone())
        .ok_or_else(|| {
            CliError::InvalidInput(
                "No family snapshot given; pass --snapshot or set settings.snapshot".to_string(),
            )
        })?;

    let snapshot = Snapshot::load(&source)?;
    let graph = FamilyGraph::from_source(&snapshot);
    debug!(snapshot = %source, report = %graph.report().summary(), "Family graph ready");

    let resolver = KinshipResolver::new(&graph, config.resolver.clone());

    match command {
        Command::Relate(args) => commands::execute_relate(args, &resolver, formatter),
        Command::Sweep(args) => commands::execute_sweep(args, &resolver, formatter),
        Command::Ancestors(args) => commands::execute_ancestors(args, &resolver, formatter),
        Command::Inspect => commands::execute_inspect(&resolver, formatter),
        Command::Init(_) => unreachable!(),
    }
}
