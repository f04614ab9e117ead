#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use sqlscout::catalog::ColumnInfo;
    use sqlscout::filter::ColumnMatcher;

    fn keywords(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn order_columns() -> Vec<ColumnInfo> {
        vec![
            ColumnInfo::key("OrderID", "int"),
            ColumnInfo::new("CustomerID", "int"),
            ColumnInfo::new("Total", "decimal"),
            ColumnInfo::new("ShippedDate", "datetime"),
            ColumnInfo::new("Carrier", "varchar"),
            ColumnInfo::new("Remarks", "text"),
        ]
    }

    #[test]
    fn test_exact_match_beats_everything() {
        let matcher = ColumnMatcher::new(5);
        let selected = matcher.match_columns(&keywords(&["total"]), &order_columns());

        let names: Vec<&str> = selected.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Total"]);
    }

    #[test]
    fn test_fuzzy_containment() {
        let matcher = ColumnMatcher::new(5);
        let selected = matcher.match_columns(&keywords(&["shipped"]), &order_columns());

        let names: Vec<&str> = selected.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["ShippedDate"]);
    }

    #[test]
    fn test_identifier_preservation_when_nothing_matches() {
        let matcher = ColumnMatcher::new(5);
        let selected = matcher.match_columns(&keywords(&["warehouse"]), &order_columns());

        let names: Vec<&str> = selected.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["OrderID", "CustomerID"]);
    }

    #[test]
    fn test_fallback_to_first_columns() {
        let matcher = ColumnMatcher::new(5);
        let columns = vec![
            ColumnInfo::new("Alpha", "int"),
            ColumnInfo::new("Beta", "int"),
            ColumnInfo::new("Gamma", "int"),
            ColumnInfo::new("Delta", "int"),
            ColumnInfo::new("Epsilon", "int"),
            ColumnInfo::new("Zeta", "int"),
        ];

        let selected = matcher.match_columns(&keywords(&["unrelated"]), &columns);
        let names: Vec<&str> = selected.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma", "Delta", "Epsilon"]);
    }

    #[test]
    fn test_never_empty_for_nonempty_input() {
        let matcher = ColumnMatcher::new(5);
        let columns = vec![ColumnInfo::new("Blob", "varbinary")];

        let selected = matcher.match_columns(&keywords(&["unrelated"]), &columns);
        assert!(!selected.is_empty());
    }

    #[test]
    fn test_empty_keywords_still_preserve_identifiers() {
        let matcher = ColumnMatcher::new(5);
        let selected = matcher.match_columns(&keywords(&[]), &order_columns());

        let names: Vec<&str> = selected.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["OrderID", "CustomerID"]);
    }

    #[test]
    fn test_idempotent() {
        let matcher = ColumnMatcher::new(5);
        let kws = keywords(&["shipped", "total"]);

        let first = matcher.match_columns(&kws, &order_columns());
        let second = matcher.match_columns(&kws, &order_columns());
        assert_eq!(first, second);
    }
}
