//! Target path derivation
//!
//! A source named `X` lands in `X` with its first `.json` removed, as
//! `graph.json`. Matching is a plain substring test, so `a.json.bak` maps to
//! the directory `a.bak`, not `a.json`.
//!
//! On Unix names are matched and rewritten as raw bytes, so names that are
//! not valid UTF-8 still migrate. Elsewhere only UTF-8 names can match.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use crate::discovery::SourceFile;

/// Substring that marks a directory entry as a source file
pub const SOURCE_MARKER: &str = ".json";

/// Fixed name of the file written inside every target directory
pub const TARGET_FILE_NAME: &str = "graph.json";

#[cfg(unix)]
fn name_bytes(name: &OsStr) -> Option<&[u8]> {
    use std::os::unix::ffi::OsStrExt;
    Some(name.as_bytes())
}

#[cfg(not(unix))]
fn name_bytes(name: &OsStr) -> Option<&[u8]> {
    name.to_str().map(str::as_bytes)
}

#[cfg(unix)]
fn name_from_bytes(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes)
}

// Cutting an ASCII marker out of valid UTF-8 leaves valid UTF-8.
#[cfg(not(unix))]
fn name_from_bytes(bytes: Vec<u8>) -> OsString {
    String::from_utf8_lossy(&bytes).into_owned().into()
}

fn marker_position(bytes: &[u8]) -> Option<usize> {
    let marker = SOURCE_MARKER.as_bytes();
    bytes.windows(marker.len()).position(|w| w == marker)
}

/// Target directory name for a source name
///
/// Only the first occurrence of the marker is removed. Returns `None` when
/// the name does not contain the marker at all.
pub fn target_dir_name(name: &OsStr) -> Option<OsString> {
    let bytes = name_bytes(name)?;
    let start = marker_position(bytes)?;

    let mut stripped = Vec::with_capacity(bytes.len() - SOURCE_MARKER.len());
    stripped.extend_from_slice(&bytes[..start]);
    stripped.extend_from_slice(&bytes[start + SOURCE_MARKER.len()..]);
    Some(name_from_bytes(stripped))
}

/// Where one source file goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationPlan {
    /// Derived directory name, relative to the root
    pub target_name: OsString,
    /// Source file being copied
    pub source: PathBuf,
    /// Directory created for it
    pub target_dir: PathBuf,
    /// `graph.json` inside `target_dir`
    pub target_file: PathBuf,
}

impl MigrationPlan {
    /// Plan the migration of a discovered source, resolved against `root`
    pub fn new(root: &Path, source: &SourceFile) -> Self {
        let target_dir = root.join(&source.target_name);
        let target_file = target_dir.join(TARGET_FILE_NAME);
        Self {
            target_name: source.target_name.clone(),
            source: source.path.clone(),
            target_dir,
            target_file,
        }
    }

    /// True when the derived directory name is empty (source named `.json`)
    pub fn has_empty_target(&self) -> bool {
        self.target_name.is_empty()
    }
}
