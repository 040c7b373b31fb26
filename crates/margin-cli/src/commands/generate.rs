//! Generate command: write a synthetic P&L facts CSV.

use crate::cli::GenerateArgs;
use crate::error::Result;
use crate::output::Formatter;
use margin_facts::{write_table_csv, SyntheticPnl};

/// Generate the synthetic fact table and write it as CSV.
pub fn execute_generate(args: &GenerateArgs, formatter: &Formatter) -> Result<()> {
    let table = SyntheticPnl::new()
        .with_stores(args.stores)
        .with_periods(args.periods)
        .with_seed(args.seed)
        .generate();

    write_table_csv(&table, &args.output)?;

    println!(
        "{}",
        formatter.success(&format!(
            "Wrote {} fact rows to {}",
            table.rows.len(),
            args.output.display()
        ))
    );
    Ok(())
}
