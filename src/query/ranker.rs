//! Ranking a candidate list by fuzzy score.

use serde::Serialize;

use super::matcher::fuzzy_match;

/// One ranked hit from [`filter_and_score`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredCandidate {
    /// Position of the item in the input list.
    pub index: usize,
    /// The item text itself.
    pub text: String,
    /// Relative relevance; only comparable within one result set.
    pub score: u32,
}

/// Match every item against `pattern` and return the hits in rank order.
///
/// Results are sorted by score descending; equal scores keep ascending input
/// order, so rankings are reproducible run to run. Returns an empty vec when
/// nothing matches. The empty pattern matches every item with score 0,
/// preserving input order.
pub fn filter_and_score<S: AsRef<str>>(pattern: &str, items: &[S]) -> Vec<ScoredCandidate> {
    let mut results: Vec<ScoredCandidate> = items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| {
            fuzzy_match(pattern, item.as_ref()).map(|score| ScoredCandidate {
                index,
                text: item.as_ref().to_string(),
                score,
            })
        })
        .collect();

    results.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_items() -> Vec<&'static str> {
        vec![
            "claude-code-switcher",
            "trading-newsletter",
            "headlines-neutralizer",
            "test-project",
        ]
    }

    #[test]
    fn test_empty_pattern_returns_all_in_input_order() {
        let results = filter_and_score("", &sample_items());
        assert_eq!(results.len(), 4);
        for (i, result) in results.iter().enumerate() {
            assert_eq!(result.index, i);
            assert_eq!(result.score, 0);
        }
    }

    #[test]
    fn test_initials_query_filters_to_single_hit() {
        let results = filter_and_score("ccs", &sample_items());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].text, "claude-code-switcher");
        assert_eq!(results[0].index, 0);
    }

    #[test]
    fn test_prefix_hit_ranks_above_scattered_hit() {
        let results = filter_and_score(
            "test",
            &["test-project", "headlines-neutralizer", "trading-newsletter"],
        );
        assert!(!results.is_empty());
        assert_eq!(results[0].text, "test-project");
    }

    #[test]
    fn test_no_matches_returns_empty() {
        assert!(filter_and_score("xyz", &sample_items()).is_empty());
        assert!(filter_and_score("a", &Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_scores_sorted_descending() {
        let results = filter_and_score("t", &sample_items());
        assert_eq!(results.len(), 4);
        for pair in results.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn test_only_matching_items_kept() {
        let items = sample_items();
        for result in filter_and_score("er", &items) {
            assert!(fuzzy_match("er", &result.text).is_some());
            assert_eq!(items[result.index], result.text);
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        // Identical texts score identically, so the tie-break is visible.
        let results = filter_and_score("ab", &["abc", "abc", "abc"]);
        assert_eq!(results.len(), 3);
        let indices: Vec<usize> = results.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }
}
