use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use graph_split_core::Migrator;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// graph-split - one directory per graph file
///
/// Every entry whose name contains `.json` is copied to
/// `<name without the first .json>/graph.json`. Sources are left in place.
#[derive(Parser)]
#[command(name = "graph-split")]
#[command(version)] // Auto-pull version from Cargo.toml
#[command(about = "Move flat *.json graph files into per-graph directories", long_about = None)]
struct Cli {
    /// Directory to migrate (not descended into)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Print what would be written without touching the filesystem
    #[arg(long)]
    dry_run: bool,

    /// Print the migration report as JSON instead of the success line
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the result.
    const CRATES: &[&str] = &["graph_split", "graph_split_core"];
    let level = cli.verbose.tracing_level_filter();
    let allowlist = CRATES
        .iter()
        .map(|c| format!("{c}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(format!("warn,{allowlist}")))
        .with_writer(std::io::stderr)
        .init();

    let report = Migrator::new(&cli.root)
        .dry_run(cli.dry_run)
        .run()
        .with_context(|| format!("migrate {}", cli.root.display()))?;
    debug!(
        files = report.len(),
        bytes = report.total_bytes(),
        dry_run = report.dry_run,
        "migration finished"
    );

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("serialize report")?;
        println!("{json}");
    } else {
        println!("success");
    }

    Ok(())
}
