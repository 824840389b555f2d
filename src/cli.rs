use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "paddyplan",
    version,
    about = "Paddy variety recommendation and input planning"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config.yaml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank varieties for the configured field (default)
    Recommend {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Seed, fertilizer and pesticide quantities for the field
    Plan {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare profitability scenarios for the field acreage
    Simulate {
        /// Only this scenario, e.g. "Organic Paddy"
        scenario: Option<String>,
    },
    /// List the active variety catalog and scoring rubric
    Catalog {
        /// Show one variety in detail
        variety: Option<String>,
    },
    /// Re-run interactive setup
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_and_subcommand() {
        let cli = Cli::parse_from(["paddyplan", "-vv", "-c", "my.yaml", "plan", "--json"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("my.yaml")));
        assert!(matches!(cli.command, Some(Commands::Plan { json: true })));
    }

    #[test]
    fn simulate_and_catalog_take_optional_names() {
        let cli = Cli::parse_from(["paddyplan", "simulate", "Organic Paddy"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Simulate { scenario: Some(ref s) }) if s == "Organic Paddy"
        ));

        let cli = Cli::parse_from(["paddyplan", "catalog"]);
        assert!(matches!(cli.command, Some(Commands::Catalog { variety: None })));
    }

    #[test]
    fn subcommand_is_optional() {
        let cli = Cli::parse_from(["paddyplan"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.verbose, 0);
    }
}
