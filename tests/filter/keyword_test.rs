#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use sqlscout::filter::{extract_keywords, SynonymMap};

    fn set(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_stop_words_and_short_tokens_removed() {
        let keywords = extract_keywords("Show me all customers from New York");
        assert_eq!(keywords, set(&["customers", "york"]));
    }

    #[test]
    fn test_request_verbs_removed() {
        let keywords = extract_keywords("List emails for pending engagements");
        assert_eq!(keywords, set(&["emails", "pending", "engagements"]));
    }

    #[test]
    fn test_sql_reserved_words_removed() {
        let keywords = extract_keywords("select revenue where region is east");
        assert_eq!(keywords, set(&["revenue", "region", "east"]));
    }

    #[test]
    fn test_case_insensitive_and_deduplicated() {
        let keywords = extract_keywords("Orders ORDERS orders");
        assert_eq!(keywords, set(&["orders"]));
    }

    #[test]
    fn test_underscored_tokens_survive() {
        let keywords = extract_keywords("group rows by shipped_date");
        assert!(keywords.contains("shipped_date"));
        assert!(keywords.contains("rows"));
    }

    #[test]
    fn test_empty_question_yields_empty_set() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("of me by").is_empty());
    }

    #[test]
    fn test_tokens_must_start_with_a_letter() {
        // "99problems" starts with a digit; the token begins at the letter.
        let keywords = extract_keywords("99problems");
        assert_eq!(keywords, set(&["problems"]));
    }

    #[test]
    fn test_synonyms_rewrite_before_extraction() {
        let mut synonyms = SynonymMap::new();
        synonyms.insert("clients", "customers");

        let rewritten = synonyms.rewrite("Show me all clients from New York");
        let keywords = extract_keywords(&rewritten);
        assert_eq!(keywords, set(&["customers", "york"]));
    }

    #[test]
    fn test_synonym_phrases_replace_whole_words() {
        let mut synonyms = SynonymMap::new();
        synonyms.insert("turnover", "revenue");

        let rewritten = synonyms.rewrite("quarterly turnover by region");
        let keywords = extract_keywords(&rewritten);
        assert!(keywords.contains("revenue"));
        assert!(!keywords.contains("turnover"));
    }
}
