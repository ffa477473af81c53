//! Project discovery.
//!
//! Scans the Claude Code projects directory, turns each encoded entry into a
//! [`Project`] record, and glues the result list to the fuzzy ranker.

pub mod discovery;
pub mod session_index;

pub use discovery::{Project, load_projects, search_projects, sort_by_last_used, sort_by_name};
