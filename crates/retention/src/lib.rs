//! Retention-based pruning of date-named directories
//!
//! This crate provides:
//! - Dated directory entries (`YYYY-MM-DD` base names)
//! - Monthly / weekly / daily bucket classification
//! - Retention policies (keep-counts per bucket)
//! - Keep/delete planning and the destructive prune pass
//! - Fixture seeding for demos and tests

pub mod bucket;
pub mod entry;
pub mod error;
pub mod plan;
pub mod policy;
pub mod prune;
pub mod seed;

// Re-exports
pub use bucket::Bucket;
pub use entry::{scan, DatedDir};
pub use error::PruneError;
pub use plan::PrunePlan;
pub use policy::RetentionPolicy;
pub use prune::{PruneReport, Pruner};
pub use seed::{cleanup, seed, seed_temp};

/// Result type for pruning operations
pub type Result<T> = std::result::Result<T, PruneError>;
