//! Configuration loading
//!
//! The config document is YAML, or TOML when the file ends in `.toml`:
//!
//! ```yaml
//! verbose: true
//! root: /var/backups/nightly
//! retention:
//!   monthly: 2
//!   weekly: 4
//!   daily: 5
//! ```
//!
//! Every field is optional. Counts default to 0 and negative counts are
//! treated as 0.

use anyhow::{Context, Result};
use retention::RetentionPolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// Top-level configuration document
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Log every kept/removed directory
    pub verbose: bool,
    /// Directory to prune; a seeded temporary root is used when unset
    pub root: Option<PathBuf>,
    /// Keep-counts per bucket
    pub retention: RetentionConfig,
}

/// `retention` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RetentionConfig {
    pub monthly: i64,
    pub weekly: i64,
    pub daily: i64,
}

impl Config {
    /// Load and parse a config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::parse(&contents, is_toml(path))
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse a config document
    pub fn parse(contents: &str, as_toml: bool) -> Result<Self> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = if as_toml {
            toml::from_str(contents)?
        } else {
            serde_yaml::from_str(contents)?
        };
        Ok(config)
    }

    /// Load `explicit` if given, else `config.yaml` in the working directory
    /// if it exists, else built-in defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            Self::load(default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Retention policy with negative counts clamped
    pub fn policy(&self) -> RetentionPolicy {
        RetentionPolicy::new(
            self.retention.monthly,
            self.retention.weekly,
            self.retention.daily,
        )
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("toml"))
        .unwrap_or(false)
}
