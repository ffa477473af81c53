//! # ccs - Claude Code project switcher
//!
//! Claude Code records every project it has been run in as a directory under
//! `~/.claude/projects/`, named with a lossy encoding of the project path
//! (`c:\work\root\project` becomes `c--work-root-project`). `ccs` turns that
//! record back into something useful: it recovers real project paths from the
//! encoded names and lets you fuzzy-search and jump between projects from the
//! shell.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`decode`] - Path reconstruction from encoded directory names
//! - [`query`] - Fuzzy matching and ranking of project display strings
//! - [`projects`] - Project discovery and session-index parsing
//! - [`output`] - Terminal and JSON result formatting
//! - [`utils`] - Configuration and app data directory handling
//!
//! ## Quick Start
//!
//! ```ignore
//! use ccs::projects::{load_projects, search_projects};
//! use ccs::utils::app_data::default_projects_dir;
//!
//! let projects = load_projects(&default_projects_dir().unwrap()).unwrap();
//! for (project, score) in search_projects("api", &projects) {
//!     println!("{:>4}  {}", score, project.path.display());
//! }
//! ```
//!
//! ## Why decoding needs the filesystem
//!
//! The directory-name encoding collapses path separators, literal hyphens,
//! and literal dots into the same `-` character, so a name like
//! `c--install-headlines-neutralizer` is ambiguous on its face. The decoder
//! searches over the possible groupings and asks the filesystem which
//! interpretation actually exists, falling back to the naive reading when
//! none does.

pub mod decode;
pub mod output;
pub mod projects;
pub mod query;
pub mod utils;
