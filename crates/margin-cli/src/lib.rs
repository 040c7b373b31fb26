//! Margin CLI - command-line tools for the P&L analytics pipeline.
//!
//! Three commands: `validate` audits an assistant-generated analysis
//! against a ground-truth facts CSV, `parse` shows the structured view of a
//! saved assistant response, and `generate` writes synthetic fixture data.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{Cli, Command, OutputFormat};
pub use error::{CliError, Result};
pub use output::Formatter;
