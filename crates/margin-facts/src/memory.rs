//! In-memory fact table

use crate::FactError;
use margin_domain::{traits::FactSource, Table};

/// A fact source wrapping an already-built table.
///
/// Used by tests and by the synthetic fixtures; also the demo-mode fallback
/// when no CSV path is configured.
#[derive(Debug, Clone)]
pub struct MemoryFactStore {
    table: Table,
}

impl MemoryFactStore {
    /// Wrap a table
    pub fn new(table: Table) -> Self {
        Self { table }
    }
}

impl FactSource for MemoryFactStore {
    type Error = FactError;

    fn fact_table(&self) -> Result<Table, Self::Error> {
        Ok(self.table.clone())
    }
}
