//! In-memory catalog backed by a snapshot.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::provider::{Catalog, CatalogError, CatalogResult};
use super::types::{ColumnInfo, TableDef};

/// Errors raised while loading a snapshot from disk.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// An ordered, in-memory catalog snapshot.
///
/// Used by tests and by the CLI in place of a live connection. Declaration
/// order is preserved; the fallback policies depend on it.
///
/// # Snapshot format
///
/// ```json
/// {
///   "tables": [
///     {
///       "name": "Customers",
///       "columns": [
///         {"name": "CustomerID", "type": "int", "primary_key": true},
///         {"name": "Name", "type": "varchar"}
///       ]
///     }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StaticCatalog {
    tables: Vec<TableDef>,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style table addition, mostly for fixtures.
    pub fn with_table(mut self, name: impl Into<String>, columns: Vec<ColumnInfo>) -> Self {
        self.tables.push(TableDef::new(name, columns));
        self
    }

    pub fn push_table(&mut self, table: TableDef) {
        self.tables.push(table);
    }

    /// Parse a snapshot from its JSON form.
    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a snapshot file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn table_count(&self) -> usize {
        self.tables.len()
    }
}

impl Catalog for StaticCatalog {
    fn list_tables(&self) -> CatalogResult<Vec<String>> {
        Ok(self.tables.iter().map(|t| t.name.clone()).collect())
    }

    fn list_columns(&self, table: &str) -> CatalogResult<Vec<ColumnInfo>> {
        self.tables
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(table))
            .map(|t| t.columns.clone())
            .ok_or_else(|| CatalogError::UnknownTable(table.to_string()))
    }
}
