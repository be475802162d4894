//! The migrator
//!
//! Fans every source file under a root out into its own directory as
//! `graph.json`. Processing is sequential and stops at the first failure;
//! whatever was migrated before the failure stays on disk.

use std::fs::{DirBuilder, File};
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::discovery::{self, SourceFile};
use crate::error::{MigrateError, Result};
use crate::naming::MigrationPlan;
use crate::report::{MigratedFile, MigrationReport};

/// Mode for created target directories, before umask
#[cfg(unix)]
const TARGET_DIR_MODE: u32 = 0o777;

/// Migrates the `.json` entries of one directory
///
/// # Example
/// ```no_run
/// use graph_split_core::Migrator;
///
/// let report = Migrator::new("graphs").run()?;
/// println!("migrated {} files", report.len());
/// # Ok::<(), graph_split_core::MigrateError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Migrator {
    root: PathBuf,
    dry_run: bool,
}

impl Migrator {
    /// Create a migrator for `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            dry_run: false,
        }
    }

    /// Only plan: list and name targets, but read and write nothing
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Run the migration
    ///
    /// # Errors
    /// The first failing step, as a [`MigrateError`] carrying the path and
    /// the OS error. Sources after the failing one are not touched.
    #[instrument(skip(self), fields(root = %self.root.display(), dry_run = self.dry_run))]
    pub fn run(&self) -> Result<MigrationReport> {
        let sources = discovery::discover_sources(&self.root)?;
        debug!(count = sources.len(), "discovered sources");

        let mut report = MigrationReport::new(self.root.clone(), self.dry_run);

        for source in sources {
            let plan = MigrationPlan::new(&self.root, &source);

            let bytes = if self.dry_run {
                check_target_name(&plan)?;
                info!(
                    source = %plan.source.display(),
                    target = %plan.target_file.display(),
                    "would migrate"
                );
                None
            } else {
                Some(migrate_one(&source, &plan)?)
            };

            report.files.push(MigratedFile::from_plan(plan, bytes));
        }

        Ok(report)
    }
}

/// Copy one source into its target directory, returning the bytes written
fn migrate_one(source: &SourceFile, plan: &MigrationPlan) -> Result<u64> {
    let contents = std::fs::read(&source.path).map_err(|e| MigrateError::ReadFile {
        path: source.path.clone(),
        source: e,
    })?;

    create_target_dir(plan)?;

    let mut file = File::create(&plan.target_file).map_err(|e| MigrateError::CreateFile {
        path: plan.target_file.clone(),
        source: e,
    })?;

    file.write_all(&contents).map_err(|e| MigrateError::WriteFile {
        path: plan.target_file.clone(),
        source: e,
    })?;

    info!(
        source = %source.path.display(),
        target = %plan.target_file.display(),
        bytes = contents.len(),
        "migrated"
    );

    Ok(contents.len() as u64)
}

/// A source named exactly `.json` has no directory name left to create
fn check_target_name(plan: &MigrationPlan) -> Result<()> {
    if plan.has_empty_target() {
        return Err(MigrateError::CreateDir {
            path: plan.target_dir.clone(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty target directory name"),
        });
    }
    Ok(())
}

fn create_target_dir(plan: &MigrationPlan) -> Result<()> {
    check_target_name(plan)?;

    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(TARGET_DIR_MODE);
    }
    builder
        .create(&plan.target_dir)
        .map_err(|source| MigrateError::CreateDir {
            path: plan.target_dir.clone(),
            source,
        })
}
