//! Validate command: audit a claim set against a ground-truth facts CSV.

use crate::cli::ValidateArgs;
use crate::error::Result;
use crate::output::Formatter;
use margin_domain::traits::FactSource;
use margin_domain::ValidationSummary;
use margin_facts::CsvFactStore;
use margin_validator::{summarize, ClaimSet, Validator};
use std::fs;

/// Run the validation and print the report.
///
/// Returns the summary so the caller can decide the exit code.
pub fn execute_validate(args: &ValidateArgs, formatter: &Formatter) -> Result<ValidationSummary> {
    let claims_text = fs::read_to_string(&args.claims)?;
    let claim_set = ClaimSet::from_toml(&claims_text)?;

    let facts = CsvFactStore::new(&args.facts).fact_table()?;

    println!(
        "{}",
        formatter.info(&format!(
            "Loaded {} claims, {} fact rows",
            claim_set.claims.len(),
            facts.rows.len()
        ))
    );

    let validator = Validator::default_config();
    let outcomes = validator.validate(&claim_set.claims, &facts);
    let summary = summarize(&outcomes);

    println!("{}", formatter.format_outcomes(&outcomes)?);
    println!("{}", formatter.format_summary(&summary));

    if let Some(path) = &args.output {
        let report = serde_json::json!({
            "total_validations": summary.total,
            "valid_count": summary.valid_count,
            "invalid_count": summary.invalid_count,
            "accuracy_rate_pct": summary.accuracy_rate_pct,
            "band": summary.band(),
            "detailed_results": outcomes,
        });
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
        println!(
            "{}",
            formatter.success(&format!("Detailed results saved to {}", path.display()))
        );
    }

    Ok(summary)
}
