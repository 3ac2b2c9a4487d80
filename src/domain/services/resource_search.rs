//! Weighted fuzzy search over the resource catalogue.
//!
//! Each field is scored by approximate substring matching: edit errors
//! divided by the query length, plus a small penalty for how far into the
//! field the match starts. A field counts as a match when its score is at
//! most `THRESHOLD`; matched fields are combined as `Π score^weight` to rank
//! results (0 is a perfect match).

use crate::domain::models::ResourceEntry;

pub const THRESHOLD: f64 = 0.4;
const LOCATION_DISTANCE: f64 = 100.0;
const PERFECT: f64 = f64::EPSILON;

const TITLE_WEIGHT: f64 = 0.4;
const SNIPPET_WEIGHT: f64 = 0.3;
const CATEGORY_WEIGHT: f64 = 0.2;
const KEYWORDS_WEIGHT: f64 = 0.1;

#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub entry: &'static ResourceEntry,
    pub score: f64,
}

/// Lowest edit distance of `pattern` against any substring of `text`,
/// with the index where that best match ends.
fn best_approximate_match(pattern: &[char], text: &[char]) -> (usize, usize) {
    let m = pattern.len();
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut best = (prev[m], 0);

    for (j, tc) in text.iter().enumerate() {
        let mut cur = vec![0; m + 1];
        for i in 1..=m {
            let cost = if pattern[i - 1] == *tc { 0 } else { 1 };
            cur[i] = (prev[i - 1] + cost).min(prev[i] + 1).min(cur[i - 1] + 1);
        }
        if cur[m] < best.0 {
            best = (cur[m], j + 1);
        }
        prev = cur;
    }
    best
}

/// Score of `query` against one field, `None` when above the threshold
pub fn field_score(query: &str, text: &str) -> Option<f64> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    let text = text.to_lowercase();

    let score = if let Some(byte_idx) = text.find(&query) {
        let loc = text[..byte_idx].chars().count() as f64;
        loc / LOCATION_DISTANCE
    } else {
        let pattern: Vec<char> = query.chars().collect();
        let haystack: Vec<char> = text.chars().collect();
        let (errors, end) = best_approximate_match(&pattern, &haystack);
        let start = end.saturating_sub(pattern.len()) as f64;
        errors as f64 / pattern.len() as f64 + start / LOCATION_DISTANCE
    };

    (score <= THRESHOLD).then_some(score)
}

fn entry_score(query: &str, entry: &ResourceEntry) -> Option<f64> {
    let keyword_score = entry
        .keywords
        .iter()
        .filter_map(|k| field_score(query, k))
        .reduce(f64::min);

    let fields = [
        (field_score(query, entry.title), TITLE_WEIGHT),
        (field_score(query, entry.snippet), SNIPPET_WEIGHT),
        (field_score(query, entry.category), CATEGORY_WEIGHT),
        (keyword_score, KEYWORDS_WEIGHT),
    ];

    let mut matched = false;
    let mut total = 1.0;
    for (score, weight) in fields {
        if let Some(score) = score {
            matched = true;
            total *= score.max(PERFECT).powf(weight);
        }
    }
    matched.then_some(total)
}

/// Entries matching `query`, best first. An empty query returns the whole
/// catalogue in its original order.
pub fn search(catalog: &'static [ResourceEntry], query: &str) -> Vec<SearchHit> {
    if query.trim().is_empty() {
        return catalog.iter().map(|entry| SearchHit { entry, score: 0.0 }).collect();
    }

    let mut hits: Vec<SearchHit> = catalog
        .iter()
        .filter_map(|entry| entry_score(query, entry).map(|score| SearchHit { entry, score }))
        .collect();
    hits.sort_by(|a, b| a.score.total_cmp(&b.score));
    hits
}

/// Group entries by category, keeping first-seen category order
pub fn group_by_category(
    entries: impl IntoIterator<Item = &'static ResourceEntry>,
) -> Vec<(&'static str, Vec<&'static ResourceEntry>)> {
    let mut groups: Vec<(&'static str, Vec<&'static ResourceEntry>)> = Vec::new();
    for entry in entries {
        match groups.iter_mut().find(|(c, _)| *c == entry.category) {
            Some((_, list)) => list.push(entry),
            None => groups.push((entry.category, vec![entry])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::resource_catalog;

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let hits = search(resource_catalog(), "   ");
        assert_eq!(hits.len(), resource_catalog().len());
        assert_eq!(hits[0].entry.id, resource_catalog()[0].id);
    }

    #[test]
    fn test_exact_title_match_ranks_first() {
        let hits = search(resource_catalog(), "Improving Your Sleep");
        assert_eq!(hits[0].entry.id, "selfhelp-sleep");
    }

    #[test]
    fn test_typo_still_matches() {
        let hits = search(resource_catalog(), "anxeity");
        assert!(hits.iter().any(|h| h.entry.id == "selfhelp-anxiety-panic"));
    }

    #[test]
    fn test_nonsense_matches_nothing() {
        assert!(search(resource_catalog(), "zqxjvwk").is_empty());
    }

    #[test]
    fn test_field_score_prefers_early_matches() {
        let early = field_score("sleep", "sleep hygiene").unwrap();
        let late = field_score("sleep", "tips for better sleep").unwrap();
        assert!(early < late);
        assert_eq!(early, 0.0);
        assert!(field_score("sleep", "counselling").is_none());
    }

    #[test]
    fn test_keyword_only_match() {
        let hits = search(resource_catalog(), "umhd");
        assert_eq!(hits[0].entry.id, "resource-umhd");
    }

    #[test]
    fn test_group_by_category_keeps_order() {
        let groups = group_by_category(resource_catalog().iter());
        assert_eq!(groups[0].0, "Counselling FAQs");
        assert_eq!(groups[0].1.len(), 5);
        let total: usize = groups.iter().map(|(_, v)| v.len()).sum();
        assert_eq!(total, resource_catalog().len());
    }
}
