//! `sessions-index.json` parsing.
//!
//! Claude Code keeps a session index inside each project data directory.
//! When present it is the authoritative source for the project path and the
//! last-used time; the encoded directory name only has to be decoded when
//! this file is missing or unusable. All fields are defaulted so partially
//! written files still parse.

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name of the session index inside each project data directory.
pub const SESSIONS_INDEX_FILE: &str = "sessions-index.json";

/// Top-level structure of `sessions-index.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionsIndex {
    pub version: u32,
    pub entries: Vec<SessionEntry>,
    pub original_path: String,
}

/// A single recorded session.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionEntry {
    pub session_id: String,
    pub full_path: String,
    pub summary: String,
    /// RFC 3339 timestamp of the session's last activity.
    pub modified: String,
    pub project_path: String,
}

impl SessionsIndex {
    /// Project path recorded in the index: the top-level `originalPath`,
    /// else the first entry's `projectPath`.
    pub fn project_path(&self) -> Option<&str> {
        if !self.original_path.is_empty() {
            return Some(&self.original_path);
        }
        self.entries
            .first()
            .map(|entry| entry.project_path.as_str())
            .filter(|path| !path.is_empty())
    }

    /// Most recent `modified` stamp across entries. Stamps that fail to
    /// parse are skipped rather than treated as errors.
    pub fn last_used(&self) -> Option<DateTime<Utc>> {
        self.entries
            .iter()
            .filter_map(|entry| DateTime::parse_from_rfc3339(&entry.modified).ok())
            .map(|stamp| stamp.with_timezone(&Utc))
            .max()
    }
}

/// Read and parse a session index file, returning the recorded project path
/// and last-used time. Errors here mean "fall back to decoding the directory
/// name", not "abort discovery".
pub fn load(path: &Path) -> Result<(String, Option<DateTime<Utc>>)> {
    let data =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    let index: SessionsIndex =
        serde_json::from_str(&data).with_context(|| format!("failed to parse {}", path.display()))?;

    let Some(project_path) = index.project_path() else {
        bail!("{} records no project path", path.display());
    };
    Ok((project_path.to_string(), index.last_used()))
}
