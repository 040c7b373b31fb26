//! Structured view of one assistant response

use crate::table::Table;

/// Sentinel answer text used when the assistant returned nothing at all
pub const NO_RESPONSE: &str = "No response";

/// The structured result of parsing one free-form assistant response.
///
/// Immutable once constructed. `sql` is empty when no statement was
/// recognized and `table` is empty when no table block was found; both are
/// ordinary values, never errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedResponse {
    /// The full response text, verbatim
    pub answer: String,

    /// The first SQL statement recognized in the response (may be empty)
    pub sql: String,

    /// The first markdown table recognized in the response (may be empty)
    pub table: Table,
}

impl ParsedResponse {
    /// The result for an empty response: sentinel answer, no SQL, no table
    pub fn no_response() -> Self {
        Self {
            answer: NO_RESPONSE.to_string(),
            sql: String::new(),
            table: Table::empty(),
        }
    }

    /// True when a SQL statement was recognized
    pub fn has_sql(&self) -> bool {
        !self.sql.is_empty()
    }

    /// True when a table block was recognized
    pub fn has_table(&self) -> bool {
        !self.table.is_empty()
    }
}
