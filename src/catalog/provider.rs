//! Catalog access trait and error type.

use thiserror::Error;

use super::types::ColumnInfo;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors surfaced by catalog access.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog backend could not be reached or failed mid-call.
    #[error("catalog access failed: {0}")]
    Unavailable(String),

    /// A column lookup referenced a table the catalog does not contain.
    #[error("unknown table: {0}")]
    UnknownTable(String),
}

/// Read-only access to the database catalog.
///
/// Implementations must be safe to call repeatedly: the filtering core
/// re-reads the catalog on every pass, since the schema is externally
/// authoritative and not owned by this crate. Calls are blocking; any
/// timeout policy belongs to the implementation, not to the callers.
pub trait Catalog: Send + Sync {
    /// List every table name, in catalog-declared order.
    fn list_tables(&self) -> CatalogResult<Vec<String>>;

    /// List the columns of `table`, in catalog-declared order.
    fn list_columns(&self, table: &str) -> CatalogResult<Vec<ColumnInfo>>;
}

impl<C: Catalog + ?Sized> Catalog for &C {
    fn list_tables(&self) -> CatalogResult<Vec<String>> {
        (**self).list_tables()
    }

    fn list_columns(&self, table: &str) -> CatalogResult<Vec<ColumnInfo>> {
        (**self).list_columns(table)
    }
}
