//! Margin Facts Layer
//!
//! Implementations of the `FactSource` trait from `margin-domain`, plus the
//! data fixtures the demo dashboard serves.
//!
//! # Sources
//!
//! - `CsvFactStore`: loads a ground-truth fact table from a CSV file
//! - `MemoryFactStore`: wraps an already-built table (tests, fixtures)
//!
//! # Fixtures
//!
//! The demo alerts, demo KPIs, and the seeded synthetic P&L generator are
//! data-fixture concerns kept behind the same `FactSource` interface as the
//! real warehouse-backed sources, so the rest of the system can be
//! exercised without any live dependency.

#![warn(missing_docs)]

mod csv_store;
pub mod fixtures;
mod memory;
pub mod synthetic;

use thiserror::Error;

pub use csv_store::{write_table_csv, CsvFactStore};
pub use fixtures::{demo_alerts, demo_kpis, Kpi, OperationalAlert};
pub use memory::MemoryFactStore;
pub use synthetic::SyntheticPnl;

/// Errors that can occur while loading or writing fact tables
#[derive(Error, Debug)]
pub enum FactError {
    /// Filesystem error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parse or write error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The file had no header row
    #[error("Missing header row in {0}")]
    MissingHeader(String),
}
