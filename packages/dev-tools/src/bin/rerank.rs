//! Ranked List Inspection Tool
//!
//! Reads a JSON snapshot of a ranked list (as returned by the backend),
//! reports integrity problems, and prints the corrective re-rank plan as
//! `{id, order}` writes.
//!
//! # Usage
//!
//! ```bash
//! # From a file
//! cargo run --bin rerank -- tabs.json
//!
//! # From stdin, always printing a plan
//! RERANK_FORCE=1 cargo run --bin rerank < tabs.json
//! ```
//!
//! # Environment Variables
//!
//! - `RERANK_MAX_RANK_LENGTH`: Rank length that triggers a re-rank (default: 12)
//! - `RERANK_FORCE`: Print a plan even when the list is healthy
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")
//!
//! Output goes to stdout; logs go to stderr.

use std::env;
use std::io::Read;

use anyhow::Context;
use dysperse_core::models::Fields;
use dysperse_core::operations::validate_ranks;
use dysperse_core::{RankAllocator, RankAssignment, RankConfig, RankedItem};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct Report {
    items: usize,
    unranked: usize,
    needs_rebalancing: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    integrity_error: Option<String>,
    plan: Vec<RankAssignment>,
}

fn load_config() -> anyhow::Result<RankConfig> {
    let mut config = RankConfig::default();
    if let Some(max) = env::var("RERANK_MAX_RANK_LENGTH")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
    {
        config.max_rank_length = max;
    }
    config.validate()?;
    Ok(config)
}

fn read_input() -> anyhow::Result<String> {
    match env::args().nth(1) {
        Some(path) => {
            std::fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging (stderr keeps stdout clean for the JSON report)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    tracing::info!("Max rank length: {}", config.max_rank_length);
    let allocator = RankAllocator::new(config)?;

    let input = read_input()?;
    let items: Vec<RankedItem<Fields>> =
        serde_json::from_str(&input).context("Input must be a JSON array of {id, order} items")?;
    tracing::info!("Loaded {} item(s)", items.len());

    let integrity_error = validate_ranks(&items).err().map(|e| e.to_string());
    if let Some(err) = &integrity_error {
        tracing::warn!("Integrity check failed: {}", err);
    }

    let needs_rebalancing = allocator.needs_rebalancing(&items);
    let force = env::var("RERANK_FORCE").is_ok();
    let plan = if needs_rebalancing || force {
        allocator.plan_rebalance(&items)
    } else {
        tracing::info!("List is healthy; no re-rank needed");
        Vec::new()
    };

    let report = Report {
        items: items.len(),
        unranked: items.iter().filter(|item| item.is_unranked()).count(),
        needs_rebalancing,
        integrity_error,
        plan,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
