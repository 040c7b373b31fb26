//! Parse command: show the structured view of a saved assistant response.

use crate::cli::ParseArgs;
use crate::error::Result;
use crate::output::Formatter;
use std::fs;

/// Parse the response file and print the extracted SQL and table.
pub fn execute_parse(args: &ParseArgs, formatter: &Formatter) -> Result<()> {
    let text = fs::read_to_string(&args.input)?;
    let parsed = margin_extractor::parse(&text);
    println!("{}", formatter.format_parsed(&parsed)?);
    Ok(())
}
