//! Encoded directory-name resolution.
//!
//! An encoded name like `c--work-root-project` stands for `c:\work\root\project`,
//! but the single `-` it uses between segments is the same character a real
//! folder name may contain, and it is also what a literal dot was collapsed
//! to. `c--install-headlines-neutralizer` could be
//! `c:\install\headlines\neutralizer` or `c:\install\headlines-neutralizer`,
//! and `c--work-fanis-dev` could end in `fanis\dev`, `fanis-dev`, or
//! `fanis.dev`. The only disambiguation signal available is whether a
//! candidate path actually exists, injected here as an [`ExistenceOracle`]
//! so the search is deterministic under test.

use std::path::{MAIN_SEPARATOR, Path};

/// Separates the drive component from the rest of the encoded name.
const DRIVE_MARKER: &str = "--";

/// The collapsed separator/hyphen/dot character.
const DELIMITER: char = '-';

/// Reports whether a candidate path currently exists.
///
/// Blanket-implemented for closures, so tests can back the oracle with an
/// in-memory set of known paths instead of the real filesystem.
pub trait ExistenceOracle {
    fn exists(&self, candidate: &Path) -> bool;
}

impl<F: Fn(&Path) -> bool> ExistenceOracle for F {
    fn exists(&self, candidate: &Path) -> bool {
        self(candidate)
    }
}

/// Oracle backed by the real filesystem.
pub struct FsOracle;

impl ExistenceOracle for FsOracle {
    fn exists(&self, candidate: &Path) -> bool {
        candidate.exists()
    }
}

/// Recover the original path from an encoded directory name.
///
/// Returns an empty string only for an empty input. A name without the `--`
/// drive marker is treated as a bare drive (`"c"` resolves to `"c:"`). When
/// no grouping of segments validates against the oracle, every delimiter is
/// treated as a path separator, so a non-empty input always yields a
/// non-empty path. The fallback path may not exist; callers that care must
/// check for themselves.
pub fn resolve_encoded<O: ExistenceOracle>(encoded: &str, oracle: &O) -> String {
    if encoded.is_empty() {
        return String::new();
    }

    let Some((drive, rest)) = encoded.split_once(DRIVE_MARKER) else {
        return format!("{encoded}:");
    };
    let root = format!("{drive}:");
    if rest.is_empty() {
        return root;
    }

    let segments: Vec<&str> = rest.split(DELIMITER).collect();

    match search(&root, &segments, oracle) {
        Some(path) => path,
        None => {
            log::debug!("no grouping of {encoded:?} exists on disk, using naive fallback");
            naive_path(&root, &segments)
        }
    }
}

/// Depth-first search over segment groupings.
///
/// At each step 1..=N leading raw segments are consumed as a single path
/// component, smallest group first. A single segment is used as-is; a larger
/// group produces a hyphen-joined candidate and then a dot-joined one
/// (`fanis` + `dev` can be the folder `fanis-dev` or `fanis.dev`). A
/// candidate is only descended into when the oracle confirms it exists, so
/// every prefix of a returned path is real. The first grouping that consumes
/// all segments wins.
fn search<O: ExistenceOracle>(base: &str, remaining: &[&str], oracle: &O) -> Option<String> {
    if remaining.is_empty() {
        return Some(base.to_string());
    }

    for take in 1..=remaining.len() {
        let group = &remaining[..take];
        for name in candidate_names(group) {
            let candidate = format!("{base}{MAIN_SEPARATOR}{name}");
            if oracle.exists(Path::new(&candidate)) {
                if let Some(resolved) = search(&candidate, &remaining[take..], oracle) {
                    return Some(resolved);
                }
            }
        }
    }

    None
}

/// Folder names a group of raw segments can stand for.
fn candidate_names(group: &[&str]) -> Vec<String> {
    if group.len() == 1 {
        vec![group[0].to_string()]
    } else {
        vec![group.join("-"), group.join(".")]
    }
}

/// Fallback interpretation: every delimiter is a path separator. Empty
/// segments (from runs of delimiters) are dropped.
fn naive_path(root: &str, segments: &[&str]) -> String {
    let mut path = root.to_string();
    for segment in segments {
        if !segment.is_empty() {
            path.push(MAIN_SEPARATOR);
            path.push_str(segment);
        }
    }
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Join path parts with the platform separator, so expectations match
    /// what the resolver builds on any OS.
    fn p(parts: &[&str]) -> String {
        parts.join(&MAIN_SEPARATOR.to_string())
    }

    /// Oracle backed by a set of paths. Every prefix of each given path is
    /// reported as existing, mirroring a real directory tree.
    fn fake_fs(paths: &[String]) -> impl Fn(&Path) -> bool + use<> {
        let mut existing = HashSet::new();
        for path in paths {
            let mut current = String::new();
            for (i, part) in path.split(MAIN_SEPARATOR).enumerate() {
                if i > 0 {
                    current.push(MAIN_SEPARATOR);
                }
                current.push_str(part);
                existing.insert(current.clone());
            }
        }
        move |candidate: &Path| {
            candidate
                .to_str()
                .is_some_and(|c| existing.contains(c))
        }
    }

    fn no_fs(_: &Path) -> bool {
        false
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(resolve_encoded("", &no_fs), "");
    }

    #[test]
    fn test_drive_only() {
        assert_eq!(resolve_encoded("c", &no_fs), "c:");
        assert_eq!(resolve_encoded("d", &no_fs), "d:");
    }

    #[test]
    fn test_drive_with_empty_remainder() {
        assert_eq!(resolve_encoded("c--", &no_fs), "c:");
    }

    #[test]
    fn test_round_trip_plain_segments() {
        let target = p(&["c:", "work", "root", "project"]);
        let fs = fake_fs(&[target.clone()]);
        assert_eq!(resolve_encoded("c--work-root-project", &fs), target);
    }

    #[test]
    fn test_hyphenated_folder_wins_over_split() {
        // Only the hyphenated folder exists, so the split reading must lose.
        let target = p(&["c:", "install", "headlines-neutralizer"]);
        let fs = fake_fs(&[target.clone()]);
        assert_eq!(
            resolve_encoded("c--install-headlines-neutralizer", &fs),
            target
        );
    }

    #[test]
    fn test_dotted_folder_wins() {
        let target = p(&["c:", "work", "root", "fanis.dev"]);
        let fs = fake_fs(&[target.clone()]);
        assert_eq!(resolve_encoded("c--work-root-fanis-dev", &fs), target);
    }

    #[test]
    fn test_split_preferred_when_both_exist() {
        // Smaller groups are tried first, so the all-separators reading wins
        // when the filesystem supports it.
        let split = p(&["c:", "a", "b", "c"]);
        let joined = p(&["c:", "a", "b-c"]);
        let fs = fake_fs(&[split.clone(), joined]);
        assert_eq!(resolve_encoded("c--a-b-c", &fs), split);
    }

    #[test]
    fn test_hyphen_join_preferred_over_dot_join() {
        let hyphen = p(&["c:", "a", "x-y"]);
        let dot = p(&["c:", "a", "x.y"]);
        let fs = fake_fs(&[hyphen.clone(), dot]);
        assert_eq!(resolve_encoded("c--a-x-y", &fs), hyphen);
    }

    #[test]
    fn test_merge_in_the_middle() {
        // The merged component need not be the last one.
        let target = p(&["c:", "srv", "fanis.dev", "api"]);
        let fs = fake_fs(&[target.clone()]);
        assert_eq!(resolve_encoded("c--srv-fanis-dev-api", &fs), target);
    }

    #[test]
    fn test_backtracks_past_dead_end() {
        // "c:\work" exists but has no "demo" under it; the whole remainder is
        // a single hyphenated folder instead.
        let decoy = p(&["c:", "work"]);
        let target = p(&["c:", "work-demo-app"]);
        let fs = fake_fs(&[decoy, target.clone()]);
        assert_eq!(resolve_encoded("c--work-demo-app", &fs), target);
    }

    #[test]
    fn test_double_delimiter_in_remainder() {
        // "c--a--b" splits into ["a", "", "b"]; the hyphen join of all three
        // is the literal folder name "a--b".
        let target = p(&["c:", "a--b"]);
        let fs = fake_fs(&[target.clone()]);
        assert_eq!(resolve_encoded("c--a--b", &fs), target);
    }

    #[test]
    fn test_fallback_when_nothing_exists() {
        assert_eq!(
            resolve_encoded("c--install-headlines-neutralizer", &no_fs),
            p(&["c:", "install", "headlines", "neutralizer"])
        );
    }

    #[test]
    fn test_fallback_skips_empty_segments() {
        assert_eq!(
            resolve_encoded("c--a--b", &no_fs),
            p(&["c:", "a", "b"])
        );
    }

    #[test]
    fn test_fallback_never_empty_for_nonempty_remainder() {
        for encoded in ["c--x", "c--x-y", "c--x--y-z", "z--1-2-3-4-5"] {
            assert!(!resolve_encoded(encoded, &no_fs).is_empty());
        }
    }

    #[test]
    fn test_full_path_need_not_exist() {
        // Only the prefix "c:\work" is on disk, so no grouping resolves
        // completely and the naive fallback applies.
        let fs = fake_fs(&[p(&["c:", "work"])]);
        assert_eq!(
            resolve_encoded("c--work-gone", &fs),
            p(&["c:", "work", "gone"])
        );
    }
}
