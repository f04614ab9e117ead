//! Schema-relevance filtering.
//!
//! Given a free-text question and a catalog too large to ship to a language
//! model wholesale, select the tables and columns the question is likely
//! about and render them inside a fixed size budget.
//!
//! # Pipeline
//!
//! ```text
//! question ──▶ SynonymMap ──▶ extract_keywords ──▶ TableMatcher
//!                                                      │ (tiered, short-circuit)
//!                                                      ▼
//!                                    per-table ColumnMatcher / full columns
//!                                                      │
//!                                                      ▼
//!                                            format::render ──▶ FilteredSchema
//! ```
//!
//! The matcher tiers recover locally from catalog failures (log and fall
//! through); only total catalog unavailability surfaces, as
//! [`FilterError::Catalog`] from [`SchemaFilter::filter`] or as a prefixed
//! error string from the text convenience methods.

pub mod column_matcher;
pub mod format;
pub mod inflect;
pub mod keywords;
pub mod similarity;
pub mod table_matcher;

pub use column_matcher::ColumnMatcher;
pub use format::{FilteredSchema, FormatConfig};
pub use keywords::{extract_keywords, SynonymError, SynonymMap};
pub use table_matcher::{MatchTier, TableMatcher, TableSelection};

use thiserror::Error;
use tracing::debug;

use crate::catalog::{Catalog, CatalogError, ColumnInfo};

/// Prefix carried by the string form of a failed filtering pass.
pub const SCHEMA_ERROR_PREFIX: &str = "Error fetching filtered schema: ";

/// Prefix carried by the string form of a failed full-schema render.
pub const FULL_SCHEMA_ERROR_PREFIX: &str = "Error fetching schema information: ";

/// True when a rendered schema string is actually an error rendering.
///
/// The text convenience methods never raise; callers that stay on the string
/// boundary use this to tell schema text from failure text.
pub fn is_schema_error(text: &str) -> bool {
    text.starts_with(SCHEMA_ERROR_PREFIX) || text.starts_with(FULL_SCHEMA_ERROR_PREFIX)
}

/// Result type for filtering operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors surfaced by a filtering pass.
///
/// An empty match is not an error; it resolves to the fallback selection.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The catalog could not be reached at all.
    #[error("catalog unavailable: {0}")]
    Catalog(#[from] CatalogError),
}

/// Tuning knobs for a filtering pass.
#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Minimum token-sort ratio for the fuzzy tiers (inclusive).
    pub fuzzy_threshold: u32,

    /// Tables taken from the head of the catalog when no tier matches.
    pub fallback_table_count: usize,

    /// Columns taken from the head of a table when no column tier matches.
    pub column_fallback_count: usize,

    /// Keep the full column list for tables selected by the exact-name tier,
    /// trading prompt size for recall on strong matches.
    pub full_columns_on_exact: bool,

    /// Rendering caps.
    pub format: FormatConfig,

    /// Optional user-term to schema-term rewrite applied before extraction.
    pub synonyms: SynonymMap,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            fuzzy_threshold: 80,
            fallback_table_count: 5,
            column_fallback_count: 5,
            full_columns_on_exact: true,
            format: FormatConfig::compact(),
            synonyms: SynonymMap::default(),
        }
    }
}

/// One-stop filtering facade over a catalog.
///
/// Holds no mutable state; independent requests may share one instance
/// across threads as long as the catalog itself allows it.
pub struct SchemaFilter<C: Catalog> {
    catalog: C,
    config: FilterConfig,
}

impl<C: Catalog> SchemaFilter<C> {
    pub fn new(catalog: C) -> Self {
        Self::with_config(catalog, FilterConfig::default())
    }

    pub fn with_config(catalog: C, config: FilterConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Run one filtering pass.
    ///
    /// The catalog is re-read in full; nothing is retained between calls.
    /// When every matcher tier comes up empty the head of the catalog is
    /// selected instead, so the model always receives some schema.
    pub fn filter(&self, question: &str) -> FilterResult<FilteredSchema> {
        let question = if self.config.synonyms.is_empty() {
            question.to_string()
        } else {
            self.config.synonyms.rewrite(question)
        };
        let keywords = extract_keywords(&question);
        debug!(count = keywords.len(), "extracted keywords");

        let all_tables = self.catalog.list_tables()?;
        let matcher = TableMatcher::new(&self.catalog, self.config.fuzzy_threshold);
        let selection = matcher.match_tables(&keywords, &all_tables);

        let (tables, exact) = if selection.is_empty() {
            let head: Vec<String> = all_tables
                .iter()
                .take(self.config.fallback_table_count)
                .cloned()
                .collect();
            debug!(count = head.len(), "no tier matched, selecting catalog head");
            (head, false)
        } else {
            let exact = selection.is_exact();
            (selection.tables, exact)
        };

        // The per-table column fetch is the costly path; bound it to what
        // the format will actually render.
        let table_cap = self.config.format.max_tables.unwrap_or(tables.len());
        let column_matcher = ColumnMatcher::new(self.config.column_fallback_count);

        let mut selected: Vec<(String, Vec<ColumnInfo>)> = Vec::new();
        for table in tables.into_iter().take(table_cap) {
            let columns = self.catalog.list_columns(&table)?;
            let kept = if exact && self.config.full_columns_on_exact {
                columns
            } else {
                column_matcher.match_columns(&keywords, &columns)
            };
            selected.push((table, kept));
        }

        Ok(format::render(&selected, all_tables.len(), &self.config.format))
    }

    /// String-boundary convenience over [`filter`](Self::filter).
    ///
    /// Failures render with [`SCHEMA_ERROR_PREFIX`]; see [`is_schema_error`].
    pub fn filtered_schema_text(&self, question: &str) -> String {
        match self.filter(question) {
            Ok(schema) => schema.text,
            Err(err) => format!("{}{}", SCHEMA_ERROR_PREFIX, err),
        }
    }

    /// Render the whole catalog, unfiltered.
    ///
    /// Failures render with [`FULL_SCHEMA_ERROR_PREFIX`].
    pub fn full_schema_text(&self) -> String {
        match format::render_full(&self.catalog) {
            Ok(text) => text,
            Err(err) => format!("{}{}", FULL_SCHEMA_ERROR_PREFIX, err),
        }
    }
}
