//! Fuzzy subsequence matching.
//!
//! A pattern matches a text when its characters appear in the text in order,
//! not necessarily adjacent, compared case-insensitively. "ccs" matches
//! "claude-code-switcher". The score rewards adjacency and word starts so
//! that prefix and initials-style hits rank above scattered ones.

/// Match `pattern` against `text`, returning a relevance score.
///
/// `None` means `pattern` (lowercased) is not a subsequence of `text`
/// (lowercased). The empty pattern matches everything with score 0.
///
/// Scoring, applied per matched character:
/// - +10 base
/// - +streak*5 when the match is adjacent to the previous one, so a run of
///   consecutive matches earns +5, +10, +15, ...
/// - +15 when the character starts a word: it is at the start of the text or
///   the preceding character is not alphabetic
/// - +20 extra at text position 0, stacking with the word bonus
///
/// Scores are only comparable between candidates matched against the same
/// pattern; they are not normalized across pattern lengths.
pub fn fuzzy_match(pattern: &str, text: &str) -> Option<u32> {
    if pattern.is_empty() {
        return Some(0);
    }

    let pattern: Vec<char> = pattern.to_lowercase().chars().collect();
    let text = text.to_lowercase();

    let mut pattern_idx = 0;
    let mut score = 0u32;
    let mut last_match: Option<usize> = None;
    let mut streak = 0u32;
    let mut prev: Option<char> = None;

    for (pos, ch) in text.chars().enumerate() {
        if pattern_idx < pattern.len() && ch == pattern[pattern_idx] {
            pattern_idx += 1;
            score += 10;

            if pos > 0 && last_match == Some(pos - 1) {
                streak += 1;
                score += streak * 5;
            } else {
                streak = 0;
            }

            if !prev.is_some_and(|c| c.is_alphabetic()) {
                score += 15;
            }
            if pos == 0 {
                score += 20;
            }

            last_match = Some(pos);
        }
        prev = Some(ch);
    }

    (pattern_idx == pattern.len()).then_some(score)
}
