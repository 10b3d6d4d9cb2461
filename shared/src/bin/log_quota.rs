//! Command-line tool for inspecting and pruning a robot log directory.
//!
//! Subcommands:
//! - `scan`: List log files oldest first with sizes and timestamps
//! - `prune`: Delete the oldest files until the tree fits the quota
//! - `acquire`: Ensure the directory, prune, and print the path for a named log

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::{Parser, Subcommand};
use shared::config_storage::{ConfigStorage, TelemetryConfig};
use shared::log_quota::{total_size, LogQuotaManager};
use tracing::info;

const MIB: u64 = 1024 * 1024;

/// Robot log directory quota tool
#[derive(Parser, Debug)]
#[command(name = "log_quota")]
#[command(about = "Inspect and prune a size-capped robot log directory")]
#[command(version)]
struct Args {
    /// Log root directory (overrides config)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Quota in MiB (overrides config)
    #[arg(long, global = true)]
    quota_mib: Option<u64>,

    /// Config directory holding telemetry.json (defaults to ~/.robot_config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List log files, oldest first
    Scan,

    /// Delete the oldest logs until the directory fits the quota
    Prune,

    /// Prepare the directory and print the path for a new log file
    Acquire {
        /// Log file name
        name: String,
    },
}

fn load_config(args: &Args) -> Result<TelemetryConfig> {
    let storage = match &args.config {
        Some(path) => ConfigStorage::with_path(path.clone()),
        None => ConfigStorage::default(),
    };
    let mut config = storage
        .telemetry_config_or_default()
        .with_context(|| format!("Failed to load config from {}", storage.root_path().display()))?;

    if let Some(root) = &args.root {
        config.log_root = root.clone();
    }
    if let Some(mib) = args.quota_mib {
        config.log_quota_bytes = quota_bytes(mib)?;
    }
    Ok(config)
}

fn quota_bytes(mib: u64) -> Result<u64> {
    mib.checked_mul(MIB)
        .with_context(|| format!("Quota of {mib} MiB does not fit in 64 bits"))
}

fn scan(manager: &LogQuotaManager) -> Result<()> {
    let files = manager.scan()?;
    for file in &files {
        let modified: DateTime<Local> = file.modified.into();
        println!(
            "{}  {:>12}  {}",
            modified.format("%Y-%m-%d %H:%M:%S"),
            file.size,
            file.path.display()
        );
    }
    println!(
        "{} file(s), {} bytes total, quota {} bytes",
        files.len(),
        total_size(&files),
        manager.quota_bytes()
    );
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let manager = config.log_quota_manager();

    info!(
        "Log root {} with quota {} bytes",
        manager.root().display(),
        manager.quota_bytes()
    );

    match &args.command {
        Command::Scan => scan(&manager)?,
        Command::Prune => {
            let report = manager.prune()?;
            println!(
                "Removed {} of {} file(s) ({} failed): {} -> {} bytes",
                report.removed.len(),
                report.files_scanned,
                report.failed_deletes,
                report.bytes_before,
                report.bytes_after
            );
        }
        Command::Acquire { name } => {
            let path = manager
                .acquire_log_file(name)
                .with_context(|| format!("Failed to prepare {}", manager.root().display()))?;
            println!("{}", path.display());
        }
    }

    Ok(())
}
