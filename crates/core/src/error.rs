//! Error types for the migration
//!
//! Every failure is an I/O failure; the variants only differ in which step
//! of the migration failed. Each one keeps the path it was working on and
//! the underlying `io::Error` as its source.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A failed migration step
#[derive(Error, Debug)]
pub enum MigrateError {
    /// Listing the scan root failed
    #[error("read dir: {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a source file into memory failed
    #[error("read file: {}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Creating a target directory (or one of its ancestors) failed
    #[error("create dir: {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Creating or truncating a target file failed
    #[error("create file: {}", path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the source bytes into a target file failed
    #[error("write file: {}", path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// The migration step an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    ReadDir,
    ReadFile,
    CreateDir,
    CreateFile,
    WriteFile,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Step::ReadDir => "read dir",
            Step::ReadFile => "read file",
            Step::CreateDir => "create dir",
            Step::CreateFile => "create file",
            Step::WriteFile => "write file",
        };
        f.write_str(name)
    }
}

impl MigrateError {
    /// Which step failed
    pub fn step(&self) -> Step {
        match self {
            MigrateError::ReadDir { .. } => Step::ReadDir,
            MigrateError::ReadFile { .. } => Step::ReadFile,
            MigrateError::CreateDir { .. } => Step::CreateDir,
            MigrateError::CreateFile { .. } => Step::CreateFile,
            MigrateError::WriteFile { .. } => Step::WriteFile,
        }
    }

    /// The path the failing step was operating on
    pub fn path(&self) -> &Path {
        match self {
            MigrateError::ReadDir { path, .. }
            | MigrateError::ReadFile { path, .. }
            | MigrateError::CreateDir { path, .. }
            | MigrateError::CreateFile { path, .. }
            | MigrateError::WriteFile { path, .. } => path,
        }
    }

    /// The underlying OS error
    pub fn io_error(&self) -> &io::Error {
        match self {
            MigrateError::ReadDir { source, .. }
            | MigrateError::ReadFile { source, .. }
            | MigrateError::CreateDir { source, .. }
            | MigrateError::CreateFile { source, .. }
            | MigrateError::WriteFile { source, .. } => source,
        }
    }
}

/// Specialized Result type for migration operations
pub type Result<T> = std::result::Result<T, MigrateError>;
