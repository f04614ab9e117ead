#[cfg(test)]
mod tests {
    use sqlscout::catalog::{ColumnInfo, StaticCatalog};
    use sqlscout::filter::format::{render, render_full, FormatConfig};

    fn wide_selection(tables: usize, columns: usize) -> Vec<(String, Vec<ColumnInfo>)> {
        (0..tables)
            .map(|t| {
                let cols = (0..columns)
                    .map(|c| ColumnInfo::new(format!("Col{}_{}", t, c), "int"))
                    .collect();
                (format!("Table{}", t), cols)
            })
            .collect()
    }

    #[test]
    fn test_compact_caps_tables_and_columns() {
        let selection = wide_selection(7, 12);
        let schema = render(&selection, 40, &FormatConfig::compact());

        assert_eq!(schema.table_count_selected, 5);
        assert_eq!(schema.table_count_total, 40);

        // Five table segments, ten columns each.
        let body = schema.text.split(" [Found").next().unwrap();
        let segments: Vec<&str> = body.split(" | ").collect();
        assert_eq!(segments.len(), 5);
        for segment in &segments {
            assert_eq!(segment.matches('(').count(), 10);
        }
        assert!(!schema.text.contains("Table5"));
        assert!(schema.text.ends_with("[Found 5 relevant tables from 40 total]"));
    }

    #[test]
    fn test_relaxed_renders_everything() {
        let selection = wide_selection(7, 12);
        let schema = render(&selection, 40, &FormatConfig::relaxed());

        assert_eq!(schema.table_count_selected, 7);
        assert!(schema.text.contains("Table6"));
        assert!(schema.text.contains("Col6_11"));
        assert!(schema.text.ends_with("[Found 7 relevant tables from 40 total]"));
    }

    #[test]
    fn test_type_abbreviations_are_three_chars() {
        let selection = vec![(
            "Orders".to_string(),
            vec![
                ColumnInfo::key("OrderID", "int"),
                ColumnInfo::new("Total", "decimal"),
                ColumnInfo::new("Shipped", "datetime"),
                ColumnInfo::new("Carrier", "nvarchar"),
            ],
        )];

        let schema = render(&selection, 1, &FormatConfig::compact());
        assert_eq!(
            schema.text,
            "Orders: OrderID(int), Total(dec), Shipped(dat), Carrier(nva) \
             [Found 1 relevant tables from 1 total]"
        );
    }

    #[test]
    fn test_empty_selection_renders_note_only() {
        let schema = render(&[], 12, &FormatConfig::compact());
        assert_eq!(schema.text, "[Found 0 relevant tables from 12 total]");
    }

    #[test]
    fn test_display_matches_text() {
        let selection = wide_selection(1, 1);
        let schema = render(&selection, 1, &FormatConfig::compact());
        assert_eq!(format!("{}", schema), schema.text);
    }

    #[test]
    fn test_render_full_blocks() {
        let catalog = StaticCatalog::new()
            .with_table(
                "Customers",
                vec![
                    ColumnInfo::key("CustomerID", "int"),
                    ColumnInfo::new("Name", "varchar"),
                ],
            )
            .with_table("Orders", vec![ColumnInfo::key("OrderID", "int")]);

        let text = render_full(&catalog).unwrap();
        assert_eq!(
            text,
            "Table: Customers\nColumns: CustomerID (int), Name (varchar)\n\
             \nTable: Orders\nColumns: OrderID (int)\n"
        );
    }
}
