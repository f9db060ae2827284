//! Run a retention pass

use crate::config::Config;
use crate::util;
use anyhow::{Context, Result};
use chrono::Utc;
use owo_colors::OwoColorize;
use retention::{Bucket, PruneReport, Pruner, RetentionPolicy};
use std::path::Path;

/// Days of fixture directories seeded when no root is configured
pub const DEMO_DAYS: u32 = 100;

/// Prefix of the temporary root used when no root is configured
pub const DEMO_PREFIX: &str = "dirprune-";

pub fn run(config: &Config) -> Result<()> {
    let pruner = Pruner::new(config.policy());

    match &config.root {
        Some(root) => prune_root(&pruner, root),
        None => run_demo(&pruner),
    }
}

fn prune_root(pruner: &Pruner, root: &Path) -> Result<()> {
    tracing::debug!("{}", root.display());

    let report = pruner
        .run(root)
        .with_context(|| format!("Failed to prune {}", root.display()))?;

    print_report(root, pruner.policy(), &report);
    Ok(())
}

/// Seed a temporary root, prune it, then remove it
fn run_demo(pruner: &Pruner) -> Result<()> {
    let today = Utc::now().date_naive();
    let root = retention::seed_temp(DEMO_PREFIX, today, DEMO_DAYS)
        .context("Failed to seed demo directories")?;

    println!(
        "{} {}",
        "No root configured, pruning seeded demo directory".dimmed(),
        root.path().display().dimmed()
    );

    prune_root(pruner, root.path())?;

    retention::cleanup(root).context("Failed to remove demo directory")?;
    Ok(())
}

fn print_report(root: &Path, policy: &RetentionPolicy, report: &PruneReport) {
    println!("{}", "Prune Complete".green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Root: {}", root.display());
    println!();

    for bucket in Bucket::ALL {
        println!(
            "  {} keep {:<3} kept {:<4} deleted {}",
            format!("{:<8}", bucket.name()).cyan(),
            policy.keep_count(bucket),
            report.kept_in(bucket),
            report.deleted_in(bucket).to_string().yellow()
        );
    }
    println!();

    if report.deleted.is_empty() {
        println!("{}", "Nothing to prune - retention already satisfied".dimmed());
    } else {
        println!(
            "Deleted {}",
            util::pluralize_dirs(report.deleted.len()).yellow()
        );
        println!("Space freed: {}", util::format_size(report.bytes_freed).green());
    }
}
