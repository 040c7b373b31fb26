//! Output formatting for the CLI.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::*;
use margin_domain::{ParsedResponse, Table, ValidationOutcome, ValidationSummary};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format validation outcomes.
    pub fn format_outcomes(&self, outcomes: &[ValidationOutcome]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(outcomes)?),
            OutputFormat::Table => Ok(self.format_outcomes_table(outcomes)),
            OutputFormat::Quiet => Ok(outcomes
                .iter()
                .map(|o| {
                    format!(
                        "{}\t{}",
                        if o.is_valid { "valid" } else { "invalid" },
                        o.claim.description
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    fn format_outcomes_table(&self, outcomes: &[ValidationOutcome]) -> String {
        if outcomes.is_empty() {
            return self.colorize("No claims to validate.", "yellow");
        }

        let mut builder = Builder::default();
        builder.push_record(["", "Claim", "Actual", "Plan", "Variance %", "Delta"]);

        for outcome in outcomes {
            let status = if outcome.is_valid { "✓" } else { "✗" };
            builder.push_record([
                status,
                &outcome.claim.description,
                &format!("{:.0}", outcome.computed_actual),
                &format!("{:.0}", outcome.computed_plan),
                &format!("{:.1}", outcome.computed_variance_pct),
                &format!("{:.2}", outcome.delta),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        table.to_string()
    }

    /// Format the run summary with its qualitative band.
    pub fn format_summary(&self, summary: &ValidationSummary) -> String {
        if self.format == OutputFormat::Json {
            return serde_json::to_string_pretty(summary).unwrap_or_default();
        }

        let band_color = match summary.accuracy_rate_pct {
            rate if rate >= 95.0 => "green",
            rate if rate >= 70.0 => "yellow",
            _ => "red",
        };

        format!(
            "Total validations: {}\nValid claims: {}\nInvalid claims: {}\nAccuracy rate: {:.1}%\n{}",
            summary.total,
            summary.valid_count,
            summary.invalid_count,
            summary.accuracy_rate_pct,
            self.colorize(summary.band().message(), band_color)
        )
    }

    /// Format a parsed assistant response.
    pub fn format_parsed(&self, parsed: &ParsedResponse) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json = serde_json::json!({
                    "answer": parsed.answer,
                    "sql": parsed.sql,
                    "table": parsed.table,
                });
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Quiet => Ok(parsed.sql.clone()),
            OutputFormat::Table => {
                let mut out = String::new();
                if parsed.has_sql() {
                    out.push_str(&format!("SQL:\n{}\n", parsed.sql));
                } else {
                    out.push_str(&self.colorize("No SQL statement found.", "yellow"));
                    out.push('\n');
                }
                if parsed.has_table() {
                    out.push_str(&format!("\nData:\n{}", render_table(&parsed.table)));
                } else {
                    out.push('\n');
                    out.push_str(&self.colorize("No table found.", "yellow"));
                }
                Ok(out)
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Render a table with rounded borders.
pub fn render_table(table: &Table) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.columns.iter().map(String::as_str));
    for row in &table.rows {
        builder.push_record(row.iter().map(String::as_str));
    }

    let mut rendered = builder.build();
    rendered.with(Style::rounded());
    rendered.to_string()
}
