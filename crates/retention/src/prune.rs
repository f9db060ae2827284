//! The destructive pruning pass

use crate::bucket::Bucket;
use crate::entry::{scan, DatedDir};
use crate::error::PruneError;
use crate::plan::PrunePlan;
use crate::policy::RetentionPolicy;
use crate::Result;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Outcome of a completed pass
#[derive(Debug, Clone, Default)]
pub struct PruneReport {
    /// Entries left in place, with their bucket
    pub kept: Vec<(Bucket, DatedDir)>,
    /// Entries removed, oldest first
    pub deleted: Vec<(Bucket, DatedDir)>,
    /// Bytes of regular files removed with the deleted entries
    pub bytes_freed: u64,
}

impl PruneReport {
    /// Number of kept entries in `bucket`
    pub fn kept_in(&self, bucket: Bucket) -> usize {
        self.kept.iter().filter(|(b, _)| *b == bucket).count()
    }

    /// Number of deleted entries in `bucket`
    pub fn deleted_in(&self, bucket: Bucket) -> usize {
        self.deleted.iter().filter(|(b, _)| *b == bucket).count()
    }
}

/// Applies a retention policy to a root of dated directories
pub struct Pruner {
    policy: RetentionPolicy,
}

impl Pruner {
    /// Create a pruner with the given policy
    pub fn new(policy: RetentionPolicy) -> Self {
        Self { policy }
    }

    /// Policy this pruner applies
    pub fn policy(&self) -> &RetentionPolicy {
        &self.policy
    }

    /// Compute the plan for `root` without deleting anything
    pub fn plan(&self, root: &Path) -> Result<PrunePlan> {
        let entries = scan(root)?;
        Ok(PrunePlan::build(entries, &self.policy))
    }

    /// Scan `root`, then remove every entry outside the keep sets
    ///
    /// Input errors abort before the first removal. A failed removal stops
    /// the pass with `PruneError::Delete`; directories removed before it stay
    /// removed and the rest are left for the next pass.
    pub fn run(&self, root: &Path) -> Result<PruneReport> {
        let plan = self.plan(root)?;
        self.run_plan(root, &plan)
    }

    /// Apply an already computed plan
    pub(crate) fn run_plan(&self, root: &Path, plan: &PrunePlan) -> Result<PruneReport> {
        let mut report = PruneReport::default();

        for (bucket, entry) in plan.keep() {
            tracing::debug!("keeping {} {}", bucket, entry.name());
            report.kept.push((bucket, entry.clone()));
        }

        for entry in plan.delete() {
            tracing::debug!("removing {}", entry.name());
            let size = dir_size(&entry.path);

            fs::remove_dir_all(&entry.path).map_err(|source| PruneError::Delete {
                path: entry.path.clone(),
                source,
            })?;

            report.bytes_freed += size;
            report.deleted.push((entry.bucket(), entry.clone()));
        }

        tracing::info!(
            root = %root.display(),
            kept = report.kept.len(),
            deleted = report.deleted.len(),
            "prune complete"
        );
        Ok(report)
    }
}

/// Total size of regular files under `dir`; unreadable entries count as 0
fn dir_size(dir: &Path) -> u64 {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| e.metadata().ok())
        .map(|m| m.len())
        .sum()
}
