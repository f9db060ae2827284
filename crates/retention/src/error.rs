//! Error types for scanning, pruning and seeding

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by a pruning pass
///
/// Input errors are raised before the first directory is removed. `Seed` and
/// `Cleanup` only come from fixture handling, never from a pass.
#[derive(Debug, Error)]
pub enum PruneError {
    /// Root directory does not exist
    #[error("root directory does not exist: {}", path.display())]
    MissingRoot { path: PathBuf },

    /// Root directory could not be listed
    #[error("failed to list {}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Child name is not a `YYYY-MM-DD` date
    #[error("not a dated directory name: '{name}' ({})", path.display())]
    InvalidName { path: PathBuf, name: String },

    /// Child of the root is a file or other non-directory
    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// Recursive removal failed; earlier removals in the pass stand
    #[error("failed to remove {}", path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Fixture directory could not be created
    #[error("failed to seed {}", path.display())]
    Seed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Temporary fixture root could not be removed
    #[error("failed to clean up {}", path.display())]
    Cleanup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PruneError {
    /// True for input errors, which abort a pass before anything is deleted
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PruneError::MissingRoot { .. }
                | PruneError::ReadDir { .. }
                | PruneError::InvalidName { .. }
                | PruneError::NotADirectory { .. }
        )
    }
}
