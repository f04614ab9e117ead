//! Compact schema rendering.
//!
//! The filtered schema travels inside a model prompt, often over a transport
//! with a hard payload ceiling, so the default rendering is aggressively
//! small: one line, three-character type abbreviations, capped table and
//! column counts. The relaxed variant drops the caps for callers without a
//! budget.

use std::fmt;

use crate::catalog::{Catalog, CatalogResult, ColumnInfo};

/// Caps applied when rendering a filtered schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatConfig {
    /// Maximum tables rendered; `None` means all.
    pub max_tables: Option<usize>,
    /// Maximum columns rendered per table; `None` means all.
    pub max_columns_per_table: Option<usize>,
}

impl FormatConfig {
    /// Size-constrained variant: at most 5 tables and 10 columns per table.
    pub fn compact() -> Self {
        Self {
            max_tables: Some(5),
            max_columns_per_table: Some(10),
        }
    }

    /// Uncapped variant for callers without a transport budget.
    pub fn relaxed() -> Self {
        Self {
            max_tables: None,
            max_columns_per_table: None,
        }
    }
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self::compact()
    }
}

/// A rendered schema plus selection metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredSchema {
    /// The compact schema text, ending with the selection note.
    pub text: String,
    /// Tables actually rendered (post-cap).
    pub table_count_selected: usize,
    /// Tables in the whole catalog.
    pub table_count_total: usize,
}

impl fmt::Display for FilteredSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Render selected tables as `table: col(typ), ...` segments joined with
/// `" | "`, followed by the selection note.
pub fn render(
    selected: &[(String, Vec<ColumnInfo>)],
    total_table_count: usize,
    config: &FormatConfig,
) -> FilteredSchema {
    let table_cap = config.max_tables.unwrap_or(selected.len());
    let shown = &selected[..selected.len().min(table_cap)];

    let mut segments = Vec::with_capacity(shown.len());
    for (table, columns) in shown {
        let column_cap = config.max_columns_per_table.unwrap_or(columns.len());
        let rendered: Vec<String> = columns
            .iter()
            .take(column_cap)
            .map(|col| format!("{}({})", col.name, abbrev_type(&col.data_type)))
            .collect();
        segments.push(format!("{}: {}", table, rendered.join(", ")));
    }

    let note = format!(
        "[Found {} relevant tables from {} total]",
        shown.len(),
        total_table_count
    );

    let mut text = segments.join(" | ");
    if text.is_empty() {
        text = note;
    } else {
        text.push(' ');
        text.push_str(&note);
    }

    FilteredSchema {
        text,
        table_count_selected: shown.len(),
        table_count_total: total_table_count,
    }
}

/// First three characters of the lower-cased declared type.
fn abbrev_type(data_type: &str) -> String {
    data_type.to_lowercase().chars().take(3).collect()
}

/// Render the entire catalog, unfiltered, one block per table.
///
/// The long-form rendering used when filtering is disabled or when a human
/// wants to read the whole schema.
pub fn render_full<C: Catalog>(catalog: &C) -> CatalogResult<String> {
    let mut lines = Vec::new();
    for table in catalog.list_tables()? {
        let columns = catalog.list_columns(&table)?;
        let rendered: Vec<String> = columns
            .iter()
            .map(|col| format!("{} ({})", col.name, col.data_type))
            .collect();
        lines.push(format!("Table: {}", table));
        lines.push(format!("Columns: {}", rendered.join(", ")));
        lines.push(String::new());
    }
    Ok(lines.join("\n"))
}
