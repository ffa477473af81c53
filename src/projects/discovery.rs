//! Scanning the projects directory into [`Project`] records.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::decode::{FsOracle, resolve_encoded};
use crate::projects::session_index::{self, SESSIONS_INDEX_FILE};
use crate::query::filter_and_score;

/// A discovered Claude Code project.
#[derive(Debug, Clone, Serialize)]
pub struct Project {
    /// Last component of the project path.
    pub name: String,
    /// Recovered project directory.
    pub path: PathBuf,
    /// Most recent session activity, when known.
    pub last_used: Option<DateTime<Utc>>,
    /// Encoded directory name under the projects dir.
    pub encoded_dir: String,
    /// Set when the recovered path no longer exists on disk. Decoded paths
    /// are best effort, so this is informational, not an error.
    pub missing: bool,
}

impl Project {
    /// Text the fuzzy ranker sees for this project. Includes the path so a
    /// query can hit any path component, not just the project name.
    pub fn display_text(&self) -> String {
        format!("{} {}", self.name, self.path.display())
    }
}

/// Load every project recorded under `projects_dir`, most recently used
/// first.
///
/// Each entry is independent, so the scan fans out across a thread pool;
/// session index reads and existence probes dominate the cost. Entries that
/// yield no usable path are skipped with a warning rather than failing the
/// whole scan.
pub fn load_projects(projects_dir: &Path) -> Result<Vec<Project>> {
    let entries = match fs::read_dir(projects_dir) {
        Ok(entries) => entries,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            bail!(
                "no Claude Code projects found under {}; run Claude Code in a \
                 project directory first, then try again",
                projects_dir.display()
            );
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read {}", projects_dir.display()));
        }
    };

    let dirs: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();

    let mut projects: Vec<Project> = dirs.par_iter().filter_map(|dir| load_project(dir)).collect();

    if projects.is_empty() {
        bail!(
            "no Claude Code projects found under {}; run Claude Code in a \
             project directory first, then try again",
            projects_dir.display()
        );
    }

    sort_by_last_used(&mut projects);
    Ok(projects)
}

/// Build one project record from its encoded directory, preferring the
/// session index and falling back to decoding the directory name against
/// the filesystem.
fn load_project(dir: &Path) -> Option<Project> {
    let encoded = dir.file_name()?.to_str()?.to_string();

    let (path, last_used) = match session_index::load(&dir.join(SESSIONS_INDEX_FILE)) {
        Ok((path, last_used)) => (PathBuf::from(path), last_used),
        Err(err) => {
            log::debug!("{encoded}: {err:#}; decoding directory name");
            let decoded = resolve_encoded(&encoded, &FsOracle);
            if decoded.is_empty() {
                log::warn!("skipping {encoded}: directory name decodes to nothing");
                return None;
            }
            // No sessions to date; the directory mtime is the best signal left.
            let last_used = fs::metadata(dir)
                .and_then(|meta| meta.modified())
                .ok()
                .map(DateTime::<Utc>::from);
            (PathBuf::from(decoded), last_used)
        }
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let missing = !path.exists();

    Some(Project {
        name,
        path,
        last_used,
        encoded_dir: encoded,
        missing,
    })
}

/// Most recently used first. Projects with no recorded activity sort last.
pub fn sort_by_last_used(projects: &mut [Project]) {
    projects.sort_by(|a, b| b.last_used.cmp(&a.last_used));
}

/// Case-insensitive name order.
pub fn sort_by_name(projects: &mut [Project]) {
    projects.sort_by_key(|project| project.name.to_lowercase());
}

/// Rank projects against a fuzzy pattern.
///
/// Returns matching projects in rank order, each with its score. The result
/// set is rebuilt from scratch on every call; there is no incremental update
/// across queries.
pub fn search_projects<'a>(pattern: &str, projects: &'a [Project]) -> Vec<(&'a Project, u32)> {
    let display: Vec<String> = projects.iter().map(Project::display_text).collect();
    filter_and_score(pattern, &display)
        .into_iter()
        .map(|candidate| (&projects[candidate.index], candidate.score))
        .collect()
}
