//! Dated directory entries and root scanning

use crate::bucket::Bucket;
use crate::error::PruneError;
use crate::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Name format of every child of a pruning root
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A directory whose base name encodes a calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedDir {
    /// Date parsed from the base name
    pub date: NaiveDate,
    /// Full path of the directory
    pub path: PathBuf,
}

impl DatedDir {
    /// Build an entry from a path whose base name is `YYYY-MM-DD`
    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        // chrono tolerates signs, padding and leading whitespace; only the
        // canonical spelling is accepted
        let date = NaiveDate::parse_from_str(&name, DATE_FORMAT)
            .ok()
            .filter(|date| date.format(DATE_FORMAT).to_string() == name);

        match date {
            Some(date) => Ok(Self { date, path }),
            None => Err(PruneError::InvalidName { path, name }),
        }
    }

    /// Bucket this entry falls in
    pub fn bucket(&self) -> Bucket {
        Bucket::classify(self.date)
    }

    /// Base name, for log lines
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.date.format(DATE_FORMAT).to_string())
    }
}

/// List the immediate children of `root` as dated entries
///
/// Any child that is not a directory, or whose name is not a date, fails the
/// whole scan.
pub fn scan(root: &Path) -> Result<Vec<DatedDir>> {
    if !root.exists() {
        return Err(PruneError::MissingRoot {
            path: root.to_path_buf(),
        });
    }

    let read_err = |source: std::io::Error| PruneError::ReadDir {
        path: root.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(root).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();

        let dated = DatedDir::from_path(&path)?;
        if !entry.file_type().map_err(read_err)?.is_dir() {
            return Err(PruneError::NotADirectory { path });
        }
        entries.push(dated);
    }

    tracing::debug!(root = %root.display(), count = entries.len(), "scanned root");
    Ok(entries)
}
