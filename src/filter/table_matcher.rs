//! Tiered table selection.
//!
//! Tiers run in a fixed order and the chain stops at the first tier that
//! yields any table. The catalog-dependent tiers treat a failed catalog call
//! as "this tier is unavailable": the failure is logged and the chain moves
//! on. Only the orchestrator's own catalog reads are allowed to fail the
//! whole pass.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::catalog::{Catalog, CatalogResult};

use super::inflect::{pluralize, singularize};
use super::similarity::token_sort_ratio;

/// The strategy that produced a table selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    /// Table name (or its singular/plural form) equals a keyword.
    ExactName,
    /// A column name (or its singular/plural form) equals a keyword.
    ColumnName,
    /// Table name scored at or above the fuzzy threshold.
    FuzzyName,
    /// A column name scored at or above the fuzzy threshold.
    FuzzyColumn,
}

/// Ordered strategy chain. Exact matches always short-circuit fuzzy tiers.
const TIERS: &[MatchTier] = &[
    MatchTier::ExactName,
    MatchTier::ColumnName,
    MatchTier::FuzzyName,
    MatchTier::FuzzyColumn,
];

/// Result of table matching: selected names in catalog-declared order, and
/// the tier that produced them. `tier` is `None` when every tier came up
/// empty; the caller decides the fallback.
#[derive(Debug, Clone)]
pub struct TableSelection {
    pub tables: Vec<String>,
    pub tier: Option<MatchTier>,
}

impl TableSelection {
    pub fn empty() -> Self {
        Self {
            tables: Vec::new(),
            tier: None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// True when the selection came from the exact-name tier; the column
    /// policy treats these as strong matches.
    pub fn is_exact(&self) -> bool {
        self.tier == Some(MatchTier::ExactName)
    }
}

/// Tiered matcher from question keywords to catalog tables.
pub struct TableMatcher<'a, C: Catalog> {
    catalog: &'a C,
    fuzzy_threshold: u32,
}

impl<'a, C: Catalog> TableMatcher<'a, C> {
    pub fn new(catalog: &'a C, fuzzy_threshold: u32) -> Self {
        Self {
            catalog,
            fuzzy_threshold,
        }
    }

    /// Select the tables relevant to `keywords`.
    ///
    /// Empty keywords or an empty catalog yield an empty selection without
    /// touching any tier.
    pub fn match_tables(&self, keywords: &BTreeSet<String>, all_tables: &[String]) -> TableSelection {
        if keywords.is_empty() || all_tables.is_empty() {
            return TableSelection::empty();
        }

        for tier in TIERS {
            match self.run_tier(*tier, keywords, all_tables) {
                Ok(tables) if !tables.is_empty() => {
                    debug!(tier = ?tier, count = tables.len(), "table tier matched");
                    return TableSelection {
                        tables,
                        tier: Some(*tier),
                    };
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(tier = ?tier, error = %err, "table tier unavailable, continuing");
                }
            }
        }

        TableSelection::empty()
    }

    fn run_tier(
        &self,
        tier: MatchTier,
        keywords: &BTreeSet<String>,
        all_tables: &[String],
    ) -> CatalogResult<Vec<String>> {
        match tier {
            MatchTier::ExactName => Ok(self.exact_name(keywords, all_tables)),
            MatchTier::ColumnName => self.column_name(keywords, all_tables),
            MatchTier::FuzzyName => Ok(self.fuzzy_name(keywords, all_tables)),
            MatchTier::FuzzyColumn => self.fuzzy_column(keywords, all_tables),
        }
    }

    fn exact_name(&self, keywords: &BTreeSet<String>, all_tables: &[String]) -> Vec<String> {
        all_tables
            .iter()
            .filter(|table| name_matches(keywords, table))
            .cloned()
            .collect()
    }

    fn column_name(
        &self,
        keywords: &BTreeSet<String>,
        all_tables: &[String],
    ) -> CatalogResult<Vec<String>> {
        let mut matched = Vec::new();
        for table in all_tables {
            let columns = self.catalog.list_columns(table)?;
            if columns.iter().any(|col| name_matches(keywords, &col.name)) {
                matched.push(table.clone());
            }
        }
        Ok(matched)
    }

    fn fuzzy_name(&self, keywords: &BTreeSet<String>, all_tables: &[String]) -> Vec<String> {
        all_tables
            .iter()
            .filter(|table| {
                keywords
                    .iter()
                    .any(|kw| token_sort_ratio(kw, table) >= self.fuzzy_threshold)
            })
            .cloned()
            .collect()
    }

    fn fuzzy_column(
        &self,
        keywords: &BTreeSet<String>,
        all_tables: &[String],
    ) -> CatalogResult<Vec<String>> {
        let mut matched = Vec::new();
        for table in all_tables {
            let columns = self.catalog.list_columns(table)?;
            let hit = columns.iter().any(|col| {
                keywords
                    .iter()
                    .any(|kw| token_sort_ratio(kw, &col.name) >= self.fuzzy_threshold)
            });
            if hit {
                matched.push(table.clone());
            }
        }
        Ok(matched)
    }
}

/// Keyword equality on the lower-cased name, tolerating singular/plural
/// variation in either direction.
fn name_matches(keywords: &BTreeSet<String>, name: &str) -> bool {
    let lowered = name.to_lowercase();
    keywords.contains(&lowered)
        || keywords.contains(&singularize(&lowered))
        || keywords.contains(&pluralize(&lowered))
}
