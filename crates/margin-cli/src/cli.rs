//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Margin - AI-assisted P&L analytics toolkit
#[derive(Debug, Parser)]
#[command(
    name = "margin",
    about = "Validate assistant claims, parse responses, and generate fixture data",
    version
)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a claim set against a ground-truth facts CSV
    Validate(ValidateArgs),

    /// Parse a saved assistant response into SQL and table
    Parse(ParseArgs),

    /// Generate a synthetic P&L facts CSV
    Generate(GenerateArgs),
}

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Claim set TOML file
    #[arg(long)]
    pub claims: PathBuf,

    /// Ground-truth facts CSV file
    #[arg(long)]
    pub facts: PathBuf,

    /// Write detailed results JSON to this path
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the parse command
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// File holding the assistant response text
    #[arg(long)]
    pub input: PathBuf,
}

/// Arguments for the generate command
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Output CSV path
    #[arg(long)]
    pub output: PathBuf,

    /// Number of stores
    #[arg(long, default_value_t = 4)]
    pub stores: usize,

    /// Number of fiscal periods per store
    #[arg(long, default_value_t = 3)]
    pub periods: usize,

    /// RNG seed (equal seeds produce equal data)
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables
    Table,
    /// Pretty-printed JSON
    Json,
    /// Minimal output
    Quiet,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_validate_args() {
        let cli = Cli::try_parse_from([
            "margin",
            "validate",
            "--claims",
            "claims.toml",
            "--facts",
            "facts.csv",
        ])
        .unwrap();

        match cli.command {
            Command::Validate(args) => {
                assert_eq!(args.claims, PathBuf::from("claims.toml"));
                assert_eq!(args.facts, PathBuf::from("facts.csv"));
                assert!(args.output.is_none());
            }
            _ => panic!("Expected validate command"),
        }
    }

    #[test]
    fn test_generate_defaults() {
        let cli =
            Cli::try_parse_from(["margin", "generate", "--output", "facts.csv"]).unwrap();

        match cli.command {
            Command::Generate(args) => {
                assert_eq!(args.stores, 4);
                assert_eq!(args.periods, 3);
                assert_eq!(args.seed, 42);
            }
            _ => panic!("Expected generate command"),
        }
    }
}
