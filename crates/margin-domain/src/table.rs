//! Tabular data - the common currency between extraction and validation

use serde::{Deserialize, Serialize};

/// An ordered, rectangular table of string cells.
///
/// Columns keep the order of first appearance in the header row. Every row
/// holds exactly one cell per declared column: rows are padded with empty
/// strings or truncated at construction so the shape stays consistent no
/// matter how ragged the input was.
///
/// An empty table (no columns, no rows) means no table was found; it is a
/// well-defined value, not an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Column names, in header order
    pub columns: Vec<String>,

    /// Row cells, positionally aligned to `columns`
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create an empty table
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a table from a header and raw rows.
    ///
    /// Each row is normalized to the header width: missing trailing cells
    /// become empty strings, extra cells beyond the header width are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use margin_domain::Table;
    ///
    /// let table = Table::new(
    ///     vec!["Type".into(), "Actual".into()],
    ///     vec![vec!["Food".into(), "100".into(), "ignored".into()]],
    /// );
    /// assert_eq!(table.shape(), (1, 2));
    /// assert_eq!(table.value(0, "Actual"), Some("100"));
    /// ```
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// True when no table block was found
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.rows.is_empty()
    }

    /// (rows, columns) shape
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), self.columns.len())
    }

    /// Position of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell value at (row index, column name)
    pub fn value(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.rows.get(row)?.get(idx).map(String::as_str)
    }

    /// Numeric view of a cell, if it parses as a number.
    ///
    /// Lenient: dollar signs and thousands separators are stripped before
    /// parsing, so `$1,234.50` reads as `1234.5`.
    pub fn numeric(&self, row: usize, column: &str) -> Option<f64> {
        self.value(row, column).and_then(parse_numeric)
    }
}

/// Parse a numeric-looking cell, tolerating `$` prefixes and `,` separators.
///
/// Returns `None` for anything that does not parse cleanly after cleanup;
/// callers decide whether a non-numeric cell is an error or just text.
pub fn parse_numeric(cell: &str) -> Option<f64> {
    let cleaned: String = cell
        .trim()
        .chars()
        .filter(|c| !matches!(c, '$' | ','))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}
