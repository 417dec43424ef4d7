//! Search filtering using nucleo-matcher.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Result of a filter operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterMatch {
    /// Index of the matched item in the original list.
    pub index: usize,
    /// Match score (higher is better).
    pub score: u32,
}

/// Every item, in order, with score 0.
fn all_items(items: &[String]) -> Vec<FilterMatch> {
    (0..items.len())
        .map(|index| FilterMatch { index, score: 0 })
        .collect()
}

/// Fuzzy filter over labels.
///
/// Returns matches sorted by score (highest first); ties keep list order.
/// A blank query returns all items with score 0.
pub fn fuzzy_filter(query: &str, items: &[String]) -> Vec<FilterMatch> {
    if query.trim().is_empty() {
        return all_items(items);
    }

    let mut matcher = Matcher::new(Config::DEFAULT);
    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );

    let mut buf = Vec::new();
    let mut matches: Vec<FilterMatch> = items
        .iter()
        .enumerate()
        .filter_map(|(index, label)| {
            let haystack = Utf32Str::new(label, &mut buf);
            pattern
                .score(haystack, &mut matcher)
                .map(|score| FilterMatch { index, score })
        })
        .collect();

    matches.sort_by(|a, b| b.score.cmp(&a.score));

    matches
}

/// Case-insensitive prefix filter over labels, keeping list order.
///
/// Used for year lists, where typing "19" should list the 1900s rather than
/// every label containing a 1 and a 9.
pub fn prefix_filter(query: &str, items: &[String]) -> Vec<FilterMatch> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return all_items(items);
    }

    items
        .iter()
        .enumerate()
        .filter(|(_, label)| label.to_lowercase().starts_with(&query))
        .map(|(index, _)| FilterMatch { index, score: 0 })
        .collect()
}
