//! Test fixtures: a scratch workspace holding a backup root and config files

use anyhow::Result;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Eight consecutive days; 01 is a monthly Sunday, 08 a weekly Sunday
pub const JANUARY_WEEK: [&str; 8] = [
    "2023-01-01", "2023-01-02", "2023-01-03", "2023-01-04",
    "2023-01-05", "2023-01-06", "2023-01-07", "2023-01-08",
];

/// Scratch directory with a `backups/` root inside it
pub struct TestRoot {
    dir: TempDir,
    root: PathBuf,
}

impl TestRoot {
    /// Create an empty workspace with an empty `backups/` root
    pub fn new() -> Result<Self> {
        let dir = TempDir::new()?;
        let root = dir.path().join("backups");
        fs::create_dir(&root)?;
        Ok(Self { dir, root })
    }

    /// Workspace directory (used as the command's working directory)
    pub fn workspace(&self) -> &Path {
        self.dir.path()
    }

    /// Backup root being pruned
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create dated directories under the root, each with a small payload
    pub fn add_dirs(&self, names: &[&str]) -> Result<()> {
        for name in names {
            let dir = self.root.join(name);
            fs::create_dir_all(&dir)?;
            fs::write(dir.join("backup.tar"), vec![7u8; 256])?;
        }
        Ok(())
    }

    /// Write a YAML config pointing at the root with the given counts
    pub fn write_config(&self, monthly: i64, weekly: i64, daily: i64, verbose: bool) -> Result<PathBuf> {
        let contents = format!(
            "verbose: {}\nroot: {}\nretention:\n  monthly: {}\n  weekly: {}\n  daily: {}\n",
            verbose,
            self.root.display(),
            monthly,
            weekly,
            daily
        );
        self.write_file("prune.yaml", &contents)
    }

    /// Write an arbitrary file into the workspace
    pub fn write_file(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.path().join(name);
        fs::write(&path, contents)?;
        Ok(path)
    }

    /// Names currently under the root
    pub fn remaining(&self) -> Result<BTreeSet<String>> {
        let mut names = BTreeSet::new();
        for entry in fs::read_dir(&self.root)? {
            names.insert(entry?.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }
}

/// Build a set of names for comparisons
pub fn name_set(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|s| s.to_string()).collect()
}
