//! Singular/plural normalization for name matching.
//!
//! Wraps the `inflector` crate with a short table of irregulars that show up
//! in database schemas and that the crate mishandles. Inputs are expected to
//! be lower-cased already; the matcher tiers lower-case before calling.

use inflector::Inflector;

static IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("child", "children"),
    ("man", "men"),
    ("woman", "women"),
    ("status", "statuses"),
    ("index", "indices"),
    ("analysis", "analyses"),
    ("criterion", "criteria"),
    ("datum", "data"),
    ("medium", "media"),
];

/// Plural form of a lower-cased word.
pub fn pluralize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    for (singular, plural) in IRREGULARS {
        if word == *singular || word == *plural {
            return (*plural).to_string();
        }
    }

    word.to_plural()
}

/// Singular form of a lower-cased word.
pub fn singularize(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    for (singular, plural) in IRREGULARS {
        if word == *singular || word == *plural {
            return (*singular).to_string();
        }
    }

    word.to_singular()
}
