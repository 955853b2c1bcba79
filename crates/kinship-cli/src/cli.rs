//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Kinship CLI - Work out how people in a family tree are related.
#[derive(Debug, Parser)]
#[command(name = "kinship")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Family snapshot (JSON), or "-" for stdin
    #[arg(short, long, global = true, env = "KINSHIP_SNAPSHOT")]
    pub snapshot: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Log resolution details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (labels or IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve how one person relates to another
    Relate(RelateArgs),

    /// Resolve one person against everyone else in the tree
    Sweep(SweepArgs),

    /// List the ancestors of a person with their generation
    Ancestors(AncestorsArgs),

    /// Show what the graph builder kept and skipped
    Inspect,

    /// Write a default configuration file
    Init(InitArgs),
}

/// Arguments for the relate command.
#[derive(Debug, Parser)]
pub struct RelateArgs {
    /// Person 1 (the answer reads "person 1 is the ... of person 2")
    pub person_a: String,

    /// Person 2
    pub person_b: String,

    /// Also resolve the reverse direction
    #[arg(short, long)]
    pub both: bool,
}

/// Arguments for the sweep command.
#[derive(Debug, Parser)]
pub struct SweepArgs {
    /// Origin person
    pub origin: String,

    /// Include people with no relationship found
    #[arg(short, long)]
    pub all: bool,
}

/// Arguments for the ancestors command.
#[derive(Debug, Parser)]
pub struct AncestorsArgs {
    /// Person whose ancestors to list
    pub person: String,

    /// Only list this many generations
    #[arg(short, long)]
    pub generations: Option<u32>,
}

/// Arguments for the init command.
#[derive(Debug, Parser)]
pub struct InitArgs {
    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relate_command() {
        let cli = Cli::parse_from([
            "kinship",
            "--snapshot",
            "family.json",
            "relate",
            "alice",
            "bob",
            "--both",
        ]);
        assert_eq!(cli.snapshot.as_deref(), Some("family.json"));
        match cli.command {
            Command::Relate(args) => {
                assert_eq!(args.person_a, "alice");
                assert_eq!(args.person_b, "bob");
                assert!(args.both);
            }
            _ => panic!("Expected Relate command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["kinship", "sweep", "alice", "--format", "json", "-v"]);
        assert!(cli.verbose);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(matches!(cli.command, Command::Sweep(_)));
    }

    #[test]
    fn test_ancestors_command() {
        let cli = Cli::parse_from(["kinship", "ancestors", "alice", "-g", "3"]);
        match cli.command {
            Command::Ancestors(args) => assert_eq!(args.generations, Some(3)),
            _ => panic!("Expected Ancestors command"),
        }
    }

    #[test]
    fn test_init_takes_global_snapshot() {
        let cli = Cli::parse_from(["kinship", "init", "--force", "-s", "tree.json"]);
        assert_eq!(cli.snapshot.as_deref(), Some("tree.json"));
        match cli.command {
            Command::Init(args) => assert!(args.force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert!(matches!(format, crate::config::OutputFormat::Quiet));
    }
}
