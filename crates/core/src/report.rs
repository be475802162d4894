//! Record of a migration run

use serde::Serialize;
use std::path::PathBuf;

use crate::naming::MigrationPlan;

/// One source file and where it went
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigratedFile {
    pub source: PathBuf,
    pub target_dir: PathBuf,
    pub target_file: PathBuf,
    /// Bytes copied; `None` on a dry run, where sources are not read
    pub bytes: Option<u64>,
}

impl MigratedFile {
    pub(crate) fn from_plan(plan: MigrationPlan, bytes: Option<u64>) -> Self {
        Self {
            source: plan.source,
            target_dir: plan.target_dir,
            target_file: plan.target_file,
            bytes,
        }
    }
}

/// Outcome of a successful [`Migrator::run`](crate::Migrator::run)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MigrationReport {
    /// Directory that was scanned
    pub root: PathBuf,
    /// Whether the run only planned and wrote nothing
    pub dry_run: bool,
    /// Processed sources, in processing order
    pub files: Vec<MigratedFile>,
}

impl MigrationReport {
    pub(crate) fn new(root: PathBuf, dry_run: bool) -> Self {
        Self {
            root,
            dry_run,
            files: Vec::new(),
        }
    }

    /// Number of sources processed
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True when nothing matched
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Total bytes copied across all target files
    pub fn total_bytes(&self) -> u64 {
        self.files.iter().filter_map(|f| f.bytes).sum()
    }
}
