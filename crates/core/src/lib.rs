//! graph-split core library
//!
//! Moves a flat directory of `*.json` graph files into a per-item layout:
//! `foo.json` is copied to `foo/graph.json`. The source files are left in
//! place.

pub mod discovery;
pub mod error;
pub mod migrate;
pub mod naming;
pub mod report;

// Re-export commonly used types
pub use error::{MigrateError, Result, Step};
pub use migrate::Migrator;
pub use report::{MigratedFile, MigrationReport};
