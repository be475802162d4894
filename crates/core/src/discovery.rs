//! Source file discovery
//!
//! This module lists the top level of a scan root and picks out the entries
//! whose names contain `.json`. The scan is never recursive, and the match
//! is a substring test on the entry name, so directories whose names contain
//! the marker are returned too.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{MigrateError, Result};
use crate::naming;

/// A top-level entry selected for migration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Entry name as listed by the OS
    pub name: OsString,
    /// Full path of the entry (root joined with `name`)
    pub path: PathBuf,
    /// `name` with its first `.json` removed
    pub target_name: OsString,
}

/// Discover source files directly under `root`
///
/// # Arguments
/// * `root` - Directory to list (not descended into)
///
/// # Returns
/// Matching entries sorted by name. On Unix names compare as raw bytes.
///
/// # Errors
/// [`MigrateError::ReadDir`] if `root` cannot be listed or an entry cannot
/// be read while iterating.
///
/// # Example
/// ```no_run
/// use graph_split_core::discovery;
///
/// let sources = discovery::discover_sources(std::path::Path::new("graphs"))?;
/// println!("Found {} sources", sources.len());
/// # Ok::<(), graph_split_core::MigrateError>(())
/// ```
pub fn discover_sources(root: &Path) -> Result<Vec<SourceFile>> {
    let read_dir_err = |source| MigrateError::ReadDir {
        path: root.to_path_buf(),
        source,
    };

    let mut sources = Vec::new();

    for entry in std::fs::read_dir(root).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let name = entry.file_name();

        let Some(target_name) = naming::target_dir_name(&name) else {
            debug!(entry = ?name, "not a source, skipping");
            continue;
        };

        sources.push(SourceFile {
            path: entry.path(),
            name,
            target_name,
        });
    }

    sources.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(sources)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn names(sources: &[SourceFile]) -> Vec<&str> {
        sources.iter().filter_map(|s| s.name.to_str()).collect()
    }

    #[test]
    fn test_discover_basic() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        File::create(root.join("moscow.json")).unwrap();
        File::create(root.join("kazan.json")).unwrap();
        File::create(root.join("notes.txt")).unwrap();

        let sources = discover_sources(root).unwrap();

        assert_eq!(names(&sources), vec!["kazan.json", "moscow.json"]);
        assert!(sources.iter().all(|s| s.path.starts_with(root)));
    }

    #[test]
    fn test_sorted_by_name() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        for name in ["c.json", "a.json", "B.json", "b.json"] {
            File::create(root.join(name)).unwrap();
        }

        let sources = discover_sources(root).unwrap();

        assert_eq!(names(&sources), vec!["B.json", "a.json", "b.json", "c.json"]);
    }

    #[test]
    fn test_substring_match_not_extension() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        File::create(root.join("a.json.bak")).unwrap();
        File::create(root.join("events.jsonl")).unwrap();
        File::create(root.join("data.JSON")).unwrap();

        let sources = discover_sources(root).unwrap();

        assert_eq!(names(&sources), vec!["a.json.bak", "events.jsonl"]);
    }

    #[test]
    fn test_directories_with_marker_are_listed() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir(root.join("archive.json")).unwrap();
        fs::create_dir(root.join("plain")).unwrap();

        let sources = discover_sources(root).unwrap();

        assert_eq!(names(&sources), vec!["archive.json"]);
    }

    // Some Unix filesystems (APFS) refuse names that are not UTF-8.
    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_name_is_discovered() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let name = OsStr::from_bytes(b"caf\xe9.json");
        File::create(root.join(name)).unwrap();

        let sources = discover_sources(root).unwrap();

        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].name.as_os_str(), name);
        assert_eq!(
            sources[0].target_name.as_os_str(),
            OsStr::from_bytes(b"caf\xe9")
        );
    }

    #[test]
    fn test_target_name_recorded() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        File::create(root.join("a.json.bak")).unwrap();

        let sources = discover_sources(root).unwrap();

        assert_eq!(sources[0].target_name, "a.bak");
        assert_eq!(sources[0].path, root.join("a.json.bak"));
    }

    #[test]
    fn test_not_recursive() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();

        fs::create_dir_all(root.join("nested")).unwrap();
        File::create(root.join("nested/inner.json")).unwrap();

        let sources = discover_sources(root).unwrap();

        assert!(sources.is_empty());
    }

    #[test]
    fn test_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let sources = discover_sources(temp_dir.path()).unwrap();

        assert_eq!(sources.len(), 0);
    }

    #[test]
    fn test_missing_root_is_read_dir_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        let err = discover_sources(&missing).unwrap_err();

        assert!(matches!(err, MigrateError::ReadDir { .. }));
        assert_eq!(err.path(), missing.as_path());
    }
}
