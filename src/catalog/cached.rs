//! Short-lived caching wrapper over a catalog.

use std::sync::RwLock;

use dashmap::DashMap;

use super::provider::{Catalog, CatalogResult};
use super::types::ColumnInfo;

/// Caches catalog reads for the lifetime of the wrapper.
///
/// A filtering pass may read the same table's columns from several tiers;
/// wrapping the accessor for the duration of one request avoids the repeat
/// round-trips without changing observable results. Errors are never cached,
/// so a transient failure does not poison later calls.
///
/// Intended to be constructed per request (or otherwise short-lived). The
/// schema is externally authoritative; holding this wrapper across requests
/// would serve stale catalog state.
pub struct CachedCatalog<C: Catalog> {
    inner: C,
    tables: RwLock<Option<Vec<String>>>,
    columns: DashMap<String, Vec<ColumnInfo>>,
}

impl<C: Catalog> CachedCatalog<C> {
    pub fn new(inner: C) -> Self {
        Self {
            inner,
            tables: RwLock::new(None),
            columns: DashMap::new(),
        }
    }

    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Catalog> Catalog for CachedCatalog<C> {
    fn list_tables(&self) -> CatalogResult<Vec<String>> {
        if let Ok(guard) = self.tables.read() {
            if let Some(tables) = guard.as_ref() {
                return Ok(tables.clone());
            }
        }

        let fetched = self.inner.list_tables()?;
        if let Ok(mut guard) = self.tables.write() {
            *guard = Some(fetched.clone());
        }
        Ok(fetched)
    }

    fn list_columns(&self, table: &str) -> CatalogResult<Vec<ColumnInfo>> {
        if let Some(cached) = self.columns.get(table) {
            return Ok(cached.value().clone());
        }

        let fetched = self.inner.list_columns(table)?;
        self.columns.insert(table.to_string(), fetched.clone());
        Ok(fetched)
    }
}
