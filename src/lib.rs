//! # sqlscout
//!
//! Schema-relevance filtering for natural-language-to-SQL assistants.
//!
//! A database catalog is often too large to ship to a language model in one
//! request. sqlscout selects the tables and columns a free-text question is
//! likely about, bounded by a size budget, and renders them compactly for
//! prompt assembly.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                     Question (text)                     │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [keyword extraction + synonyms]
//! ┌─────────────────────────────────────────────────────────┐
//! │                      Keyword Set                        │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [tiered table matching]
//! ┌─────────────────────────────────────────────────────────┐
//! │        Candidate Tables (+ the tier that matched)       │
//! │     exact name → column name → fuzzy name → fuzzy col   │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [per-table column matching]
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Selected Columns per Table              │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [compact rendering]
//! ┌─────────────────────────────────────────────────────────┐
//! │        FilteredSchema → (external) model prompt         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is reached through the [`catalog::Catalog`] trait; the model
//! invocation through [`llm::SqlGenerator`]. Both are seams owned by the
//! host application.
//!
//! ## Example
//!
//! ```
//! use sqlscout::catalog::{ColumnInfo, StaticCatalog};
//! use sqlscout::filter::SchemaFilter;
//!
//! let catalog = StaticCatalog::new()
//!     .with_table("Customers", vec![
//!         ColumnInfo::key("CustomerID", "int"),
//!         ColumnInfo::new("Name", "varchar"),
//!     ])
//!     .with_table("Orders", vec![
//!         ColumnInfo::key("OrderID", "int"),
//!         ColumnInfo::new("Total", "decimal"),
//!     ]);
//!
//! let filter = SchemaFilter::new(catalog);
//! let schema = filter.filter("show me all customers").unwrap();
//!
//! assert_eq!(schema.table_count_selected, 1);
//! assert!(schema.text.starts_with("Customers:"));
//! ```

pub mod catalog;
pub mod config;
pub mod filter;
pub mod llm;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::catalog::{
        CachedCatalog, Catalog, CatalogError, CatalogResult, ColumnInfo, StaticCatalog, TableDef,
    };
    pub use crate::filter::{
        extract_keywords, is_schema_error, FilterConfig, FilterError, FilteredSchema,
        FormatConfig, MatchTier, SchemaFilter, SynonymMap, TableSelection,
    };
    pub use crate::llm::{GeneratorError, SqlGenerator};
}

// Also export at crate root for convenience
pub use catalog::{Catalog, ColumnInfo, StaticCatalog};
pub use filter::{FilterConfig, FilteredSchema, SchemaFilter};
