//! Catalog data types.

use serde::{Deserialize, Serialize};

/// A column as reported by catalog introspection.
///
/// An immutable snapshot of catalog state at query time. The declared type is
/// carried verbatim; abbreviation happens at the rendering layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnInfo {
    /// Column name as declared in the catalog.
    pub name: String,

    /// Declared data type, verbatim from the catalog.
    #[serde(rename = "type")]
    pub data_type: String,

    /// Whether the column is part of the table's primary key.
    #[serde(default)]
    pub primary_key: bool,
}

impl ColumnInfo {
    /// A plain (non-key) column.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            primary_key: false,
        }
    }

    /// A primary-key column.
    pub fn key(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            primary_key: true,
        }
    }
}

/// A table definition inside a catalog snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDef {
    /// Table name, unique within the catalog.
    pub name: String,

    /// Columns in catalog-declared order.
    #[serde(default)]
    pub columns: Vec<ColumnInfo>,
}

impl TableDef {
    pub fn new(name: impl Into<String>, columns: Vec<ColumnInfo>) -> Self {
        Self {
            name: name.into(),
            columns,
        }
    }
}
