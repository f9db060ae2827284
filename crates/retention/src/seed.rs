//! Fixture seeding
//!
//! Populates a root with one directory per day counting back from a given
//! date, the layout a nightly backup job leaves behind.

use crate::entry::DATE_FORMAT;
use crate::error::PruneError;
use crate::Result;
use chrono::{Duration, NaiveDate};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Create `days` dated directories under `root`, ending at `today`
///
/// Existing directories are left alone. Returns the created paths, newest
/// first.
pub fn seed(root: &Path, today: NaiveDate, days: u32) -> Result<Vec<PathBuf>> {
    tracing::debug!("seeding '{}'", root.display());

    let mut created = Vec::with_capacity(days as usize);
    for delta in 0..days {
        let date = today - Duration::days(i64::from(delta));
        let dir = root.join(date.format(DATE_FORMAT).to_string());

        fs::create_dir_all(&dir).map_err(|source| PruneError::Seed {
            path: dir.clone(),
            source,
        })?;
        tracing::debug!("creating '{}'", dir.display());
        created.push(dir);
    }

    Ok(created)
}

/// Seed a fresh temporary root named with `prefix`
pub fn seed_temp(prefix: &str, today: NaiveDate, days: u32) -> Result<TempDir> {
    let root = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir()
        .map_err(|source| PruneError::Seed {
            path: std::env::temp_dir(),
            source,
        })?;

    seed(root.path(), today, days)?;
    Ok(root)
}

/// Remove a seeded temporary root and everything left in it
pub fn cleanup(root: TempDir) -> Result<()> {
    let path = root.path().to_path_buf();
    tracing::debug!("removing '{}'", path.display());
    root.close()
        .map_err(|source| PruneError::Cleanup { path, source })
}
