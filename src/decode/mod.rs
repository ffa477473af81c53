//! Path reconstruction from encoded project-directory names.
//!
//! Claude Code names each per-project data directory after the project path
//! with every separator, dot, and hyphen collapsed into `-`, and the drive
//! set off by `--`. The encoding is lossy, so recovery is a search against
//! the filesystem rather than a parse; see [`resolver`].

pub mod resolver;

pub use resolver::{ExistenceOracle, FsOracle, resolve_encoded};
