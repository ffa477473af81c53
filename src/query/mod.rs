//! Fuzzy search over project display strings.
//!
//! [`matcher`] decides whether a short pattern matches one candidate string
//! and how well; [`ranker`] runs the matcher over a whole list and returns
//! the hits in score order. Both are pure functions with no shared state, so
//! they can be called from anywhere without synchronization.

pub mod matcher;
pub mod ranker;

pub use matcher::fuzzy_match;
pub use ranker::{ScoredCandidate, filter_and_score};
