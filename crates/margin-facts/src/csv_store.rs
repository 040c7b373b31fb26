//! CSV-backed fact table loading and writing

use crate::FactError;
use margin_domain::{traits::FactSource, Table};
use std::io;
use std::path::{Path, PathBuf};
use tracing::info;

/// A fact table backed by a CSV file on disk.
///
/// The first record is the header; every data record is normalized to the
/// header width. Reloaded on every call so external refreshes are picked up.
pub struct CsvFactStore {
    path: PathBuf,
}

impl CsvFactStore {
    /// Create a store reading from the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FactSource for CsvFactStore {
    type Error = FactError;

    fn fact_table(&self) -> Result<Table, Self::Error> {
        let file = std::fs::File::open(&self.path)?;
        let table = read_table(file, &self.path.display().to_string())?;
        info!(
            path = %self.path.display(),
            rows = table.rows.len(),
            "loaded fact table"
        );
        Ok(table)
    }
}

/// Read a table from any CSV reader
fn read_table<R: io::Read>(reader: R, source: &str) -> Result<Table, FactError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(FactError::Csv)?
        .iter()
        .map(str::to_string)
        .collect::<Vec<_>>();

    if headers.is_empty() {
        return Err(FactError::MissingHeader(source.to_string()));
    }

    let mut rows = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(Table::new(headers, rows))
}

/// Write a table to a CSV file (header row first)
pub fn write_table_csv(table: &Table, path: impl AsRef<Path>) -> Result<(), FactError> {
    let mut writer = csv::Writer::from_path(path.as_ref())?;
    writer.write_record(&table.columns)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}
