//! Process-wide logging setup

use anyhow::{anyhow, Result};
use tracing::Level;

/// Install the global subscriber
///
/// Call once from `main`. Verbose runs log at DEBUG, which includes one line
/// per kept and removed directory; otherwise INFO. Logs go to stderr so the
/// summary on stdout stays clean.
pub fn init(verbose: bool) -> Result<()> {
    let level = if verbose { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
