//! Error types for checkout operations.

use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Errors that can occur while checking out a source snapshot.
///
/// There is no retry and no rollback anywhere in the crate: any of these
/// aborts the whole operation, and the destination directory is left in an
/// indeterminate state that callers should discard before retrying.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Destination directory missing or not a directory.  Raised before any
    /// repository mutation.
    #[error("destination is not a usable directory: {path}")]
    DestinationUnusable {
        /// The offending destination path.
        path: PathBuf,
    },

    /// The requested revision is absent from the repository's complete
    /// history after the fetch/sync step.
    #[error("revision {revision} not found in repository")]
    RevisionNotFound {
        /// The revision that could not be found.
        revision: String,
    },

    /// An external tool exited with a non-zero status.  All underlying
    /// causes (network failure, bad URL, permissions) surface uniformly
    /// through this variant.
    #[error("{command} failed ({status}): {stderr}")]
    ToolFailed {
        /// The command line that was run.
        command: String,
        /// Exit status reported by the tool.
        status: ExitStatus,
        /// Captured stderr, trimmed.
        stderr: String,
    },

    /// An external tool could not be spawned at all.
    #[error("failed to spawn {command}: {source}")]
    ToolSpawn {
        /// The command line that was attempted.
        command: String,
        /// The underlying spawn error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to read the configuration file.
    #[error("failed to read configuration: {0}")]
    ConfigRead(String),

    /// Failed to parse the configuration file.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(String),

    /// Configuration parsed but failed validation.
    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),
}

/// Result type alias for checkout operations.
pub type CheckoutResult<T> = Result<T, CheckoutError>;
