//! JSON payload conversion for tables

use margin_domain::{table::parse_numeric, Table};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A table serialized for the frontend: column list, one JSON object per
/// row keyed by column name, and the (rows, columns) shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TablePayload {
    /// Column names, in order
    pub columns: Vec<String>,
    /// One object per row, keyed by column name
    pub rows: Vec<Value>,
    /// [row count, column count]
    pub shape: [usize; 2],
}

/// Convert a table into its frontend payload.
///
/// This is the typed-inference step: numeric-looking cells become JSON
/// numbers, everything else stays text.
pub fn table_payload(table: &Table) -> TablePayload {
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut object = serde_json::Map::new();
            for (column, cell) in table.columns.iter().zip(row) {
                object.insert(column.clone(), cell_value(cell));
            }
            Value::Object(object)
        })
        .collect();

    TablePayload {
        columns: table.columns.clone(),
        rows,
        shape: [table.rows.len(), table.columns.len()],
    }
}

fn cell_value(cell: &str) -> Value {
    match parse_numeric(cell) {
        Some(number) => serde_json::Number::from_f64(number)
            .map(Value::Number)
            .unwrap_or_else(|| Value::String(cell.to_string())),
        None => Value::String(cell.to_string()),
    }
}
