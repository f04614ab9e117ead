//! Keyword extraction from natural-language questions.
//!
//! Extraction is deliberately shallow: lower-case the question, pull out
//! identifier-shaped tokens, drop stop-words and anything too short to
//! discriminate. The matcher tiers do the real work; this layer only has to
//! avoid handing them noise like "show" or "the".

use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z][a-zA-Z0-9_]*").unwrap());

/// Words that carry no schema signal: articles, pronouns, auxiliaries,
/// prepositions, question words, generic request verbs and qualifiers, and
/// SQL reserved words. Tokens of length <= 2 are dropped before this set is
/// consulted, so two-letter entries are not needed.
static STOP_WORDS: Lazy<BTreeSet<&'static str>> = Lazy::new(|| {
    [
        // Articles, determiners, quantifiers
        "the", "this", "that", "these", "those", "each", "every", "some", "any", "all", "both",
        // Question words
        "what", "which", "who", "whom", "whose", "when", "why", "how",
        // Pronouns
        "you", "your", "our", "ours", "their", "theirs", "them", "they", "its", "his", "her",
        "she", "him",
        // Auxiliaries and generic verbs
        "are", "was", "were", "been", "being", "have", "has", "had", "does", "did", "can",
        "could", "will", "would", "shall", "should", "may", "might", "must", "want", "need",
        // Prepositions and conjunctions
        "for", "from", "with", "without", "into", "onto", "over", "under", "during", "about",
        "and", "but", "nor", "not", "than", "then", "per", "via",
        // Generic request verbs
        "show", "find", "list", "get", "give", "display", "fetch", "return", "tell", "make",
        "please",
        // Generic qualifiers
        "new", "old", "recent", "latest", "first", "last", "top", "many", "much", "more", "most",
        "number",
        // SQL reserved words
        "select", "where", "join", "inner", "outer", "left", "right", "group", "order", "having",
        "limit", "offset", "distinct", "insert", "update", "delete", "table", "tables", "column",
        "columns", "database", "query", "sql", "count", "sum", "avg", "min", "max", "null",
        "like", "union", "values", "between", "exists", "case", "else", "end", "asc", "desc",
    ]
    .into_iter()
    .collect()
});

/// Extract the keyword set for a question.
///
/// Tokens are maximal runs of `[a-zA-Z][a-zA-Z0-9_]*` in the lower-cased
/// question; stop-words and tokens of length <= 2 are dropped. The result is
/// deduplicated; downstream matching does not depend on order. An empty
/// question yields an empty set.
pub fn extract_keywords(question: &str) -> BTreeSet<String> {
    let lowered = question.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str())
        .filter(|token| token.len() > 2)
        .filter(|token| !STOP_WORDS.contains(token))
        .map(str::to_string)
        .collect()
}

/// Errors raised while loading a synonym file.
#[derive(Debug, Error)]
pub enum SynonymError {
    #[error("failed to read synonyms file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse synonyms JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Maps user vocabulary onto schema vocabulary before keyword extraction.
///
/// Entries are whole-word, case-insensitive phrase rewrites applied to the
/// question text, longest phrase first. The JSON form is a flat object of
/// user term to schema term:
///
/// ```json
/// {"clients": "customers", "turnover": "revenue"}
/// ```
#[derive(Debug, Clone, Default)]
pub struct SynonymMap {
    // (lower-cased term, replacement), sorted longest term first
    entries: Vec<(String, String)>,
}

impl SynonymMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, term: impl Into<String>, replacement: impl Into<String>) {
        let term = term.into().trim().to_lowercase();
        if term.is_empty() {
            return;
        }
        self.entries.push((term, replacement.into()));
        self.entries
            .sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
    }

    pub fn from_map(map: HashMap<String, String>) -> Self {
        let mut synonyms = Self::new();
        for (term, replacement) in map {
            synonyms.insert(term, replacement);
        }
        synonyms
    }

    pub fn from_json_str(json: &str) -> Result<Self, SynonymError> {
        let map: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self::from_map(map))
    }

    /// Load a synonym file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SynonymError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Rewrite a question, replacing each mapped term with its schema term.
    ///
    /// The output is lower-cased; extraction lower-cases anyway, so nothing
    /// downstream can tell the difference.
    pub fn rewrite(&self, question: &str) -> String {
        let mut text = question.to_lowercase();
        for (term, replacement) in &self.entries {
            text = replace_word(&text, term, replacement);
        }
        text
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Whole-word replacement over already lower-cased text.
fn replace_word(text: &str, term: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;

    while let Some(found) = text[cursor..].find(term) {
        let start = cursor + found;
        let end = start + term.len();
        let boundary_before = text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !is_word_char(c));
        let boundary_after = text[end..].chars().next().map_or(true, |c| !is_word_char(c));

        out.push_str(&text[cursor..start]);
        if boundary_before && boundary_after {
            out.push_str(replacement);
        } else {
            out.push_str(term);
        }
        cursor = end;
    }

    out.push_str(&text[cursor..]);
    out
}
