//! String similarity scoring for the fuzzy matcher tiers.
//!
//! Scores are integers on a 0-100 scale; the tiers compare them against the
//! configured threshold with `>=`. [`token_sort_ratio`] is order-insensitive:
//! both inputs are reduced to sorted-token form before the edit-distance
//! comparison, so "sales order" and "order_sales" score 100.

/// Levenshtein edit distance.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j] + cost)
                .min(prev[j + 1] + 1)
                .min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Normalized similarity on a 0-100 scale. 100 means equal.
///
/// Rounded to the nearest integer so threshold comparisons are stable.
pub fn ratio(a: &str, b: &str) -> u32 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 100;
    }

    let dist = levenshtein(a, b).min(max_len);
    (((max_len - dist) as f64 / max_len as f64) * 100.0).round() as u32
}

/// Reduce a string to sorted-token form: lower-cased alphanumeric runs,
/// sorted and joined with single spaces.
fn sort_tokens(s: &str) -> String {
    let lowered = s.to_lowercase();
    let mut tokens: Vec<&str> = lowered
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

/// Token-order-insensitive similarity on a 0-100 scale.
pub fn token_sort_ratio(a: &str, b: &str) -> u32 {
    ratio(&sort_tokens(a), &sort_tokens(b))
}
