//! Command-line front end: advise on one profile, or batch-process a
//! directory of profile JSON files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossroad_core::{Advisor, EngineConfig, Profile, ValidationReport};
use crossroad_sources::default_registry;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "crossroad", about = "Career-transition decision support")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Advise on a single profile JSON file.
    Advise {
        /// Path to the profile JSON file.
        #[arg(long)]
        profile: PathBuf,
        /// Fixed simulation seed for reproducible output.
        #[arg(long)]
        seed: Option<u64>,
        /// Write the report JSON here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Process every `*.json` profile in a directory. Each input
    /// `<stem>.json` produces `<stem>_result.json` in the output directory;
    /// a bad input file is logged and skipped, never aborting the batch.
    Batch {
        /// Directory of profile JSON files.
        #[arg(long)]
        dir: PathBuf,
        /// Output directory for result files.
        #[arg(long)]
        out_dir: PathBuf,
        /// Fixed simulation seed applied to every profile.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = EngineConfig::load().context("load engine config")?;
    let advisor = Advisor::new(Arc::new(default_registry()), config);

    match cli.command {
        Command::Advise { profile, seed, out } => {
            let report = advise_file(&advisor, &profile, seed).await?;
            let json = serde_json::to_string_pretty(&report)?;
            match out {
                Some(path) => std::fs::write(&path, json)
                    .with_context(|| format!("write {}", path.display()))?,
                None => println!("{}", json),
            }
        }
        Command::Batch { dir, out_dir, seed } => {
            let processed = run_batch(&advisor, &dir, &out_dir, seed).await?;
            tracing::info!(processed, "batch complete");
        }
    }
    Ok(())
}

async fn advise_file(
    advisor: &Advisor,
    path: &Path,
    seed: Option<u64>,
) -> Result<ValidationReport> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read profile {}", path.display()))?;
    let profile: Profile = serde_json::from_str(&raw)
        .with_context(|| format!("parse profile {}", path.display()))?;
    let report = advisor
        .advise_seeded(&profile, seed)
        .await
        .with_context(|| format!("advise on {}", path.display()))?;
    Ok(report)
}

/// Returns the number of profiles successfully processed.
async fn run_batch(
    advisor: &Advisor,
    dir: &Path,
    out_dir: &Path,
    seed: Option<u64>,
) -> Result<usize> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create {}", out_dir.display()))?;

    let mut inputs: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("read directory {}", dir.display()))?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
        .collect();
    inputs.sort();

    let mut processed = 0;
    for input in inputs {
        match advise_file(advisor, &input, seed).await {
            Ok(report) => {
                let stem = input
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("profile");
                let out_path = out_dir.join(format!("{}_result.json", stem));
                let json = serde_json::to_string_pretty(&report)?;
                std::fs::write(&out_path, json)
                    .with_context(|| format!("write {}", out_path.display()))?;
                processed += 1;
            }
            Err(e) => {
                tracing::warn!(input = %input.display(), error = %e, "skipping profile");
            }
        }
    }
    Ok(processed)
}
