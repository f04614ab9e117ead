//! Tiered column selection within a matched table.

use std::collections::BTreeSet;

use crate::catalog::ColumnInfo;

/// Tiered selection of the columns relevant to a keyword set.
///
/// Tiers short-circuit like the table tiers do: exact name match, then fuzzy
/// containment, then identifier preservation, then a first-N fallback. The
/// result is non-empty whenever the input column list is non-empty.
pub struct ColumnMatcher {
    fallback_count: usize,
}

impl ColumnMatcher {
    pub fn new(fallback_count: usize) -> Self {
        Self { fallback_count }
    }

    pub fn match_columns(&self, keywords: &BTreeSet<String>, columns: &[ColumnInfo]) -> Vec<ColumnInfo> {
        if columns.is_empty() {
            return Vec::new();
        }

        let exact = exact_matches(keywords, columns);
        if !exact.is_empty() {
            return exact;
        }

        let fuzzy = fuzzy_matches(keywords, columns);
        if !fuzzy.is_empty() {
            return fuzzy;
        }

        let identifiers = identifier_columns(columns);
        if !identifiers.is_empty() {
            return identifiers;
        }

        // Head of the declaration order; the count is clamped so a table
        // never renders without columns.
        columns
            .iter()
            .take(self.fallback_count.max(1))
            .cloned()
            .collect()
    }
}

fn exact_matches(keywords: &BTreeSet<String>, columns: &[ColumnInfo]) -> Vec<ColumnInfo> {
    columns
        .iter()
        .filter(|col| keywords.contains(&col.name.to_lowercase()))
        .cloned()
        .collect()
}

fn fuzzy_matches(keywords: &BTreeSet<String>, columns: &[ColumnInfo]) -> Vec<ColumnInfo> {
    columns
        .iter()
        .filter(|col| {
            let name = col.name.to_lowercase();
            keywords.iter().any(|kw| fuzzy_related(kw, &name))
        })
        .cloned()
        .collect()
}

/// Identifier preservation: keys stay useful for joins even when the
/// question never mentions them.
fn identifier_columns(columns: &[ColumnInfo]) -> Vec<ColumnInfo> {
    columns
        .iter()
        .filter(|col| {
            let name = col.name.to_lowercase();
            col.primary_key || name.contains("id") || name.ends_with("_id")
        })
        .cloned()
        .collect()
}

/// Substring containment in either direction, or a shared underscore token.
///
/// Shared tokens shorter than three characters are ignored; the `id` segment
/// would otherwise pull every keyed column into this tier, which is the
/// identifier tier's job.
fn fuzzy_related(keyword: &str, column: &str) -> bool {
    if column.contains(keyword) || keyword.contains(column) {
        return true;
    }

    column
        .split('_')
        .filter(|segment| segment.len() >= 3)
        .any(|segment| keyword.split('_').any(|k| k == segment))
}
