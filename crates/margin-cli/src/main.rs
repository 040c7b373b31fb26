//! Margin CLI - command-line interface for the P&L analytics pipeline.

use clap::Parser;
use margin_cli::{commands, Cli, Command, Formatter, OutputFormat};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> margin_cli::Result<()> {
    let cli = Cli::parse();

    let format = cli.format.unwrap_or(OutputFormat::Table);
    let formatter = Formatter::new(format, !cli.no_color);

    match cli.command {
        Command::Validate(args) => {
            let summary = commands::execute_validate(&args, &formatter)?;
            if summary.invalid_count > 0 {
                std::process::exit(1);
            }
        }
        Command::Parse(args) => {
            commands::execute_parse(&args, &formatter)?;
        }
        Command::Generate(args) => {
            commands::execute_generate(&args, &formatter)?;
        }
    }

    Ok(())
}
