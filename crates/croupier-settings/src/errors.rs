//! Settings error types.

use std::path::PathBuf;

/// Convenience alias for settings results.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Failure while loading settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("failed to read settings file {path}")]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid JSON, or the merged document does
    /// not match the settings schema.
    #[error("invalid settings in {path}")]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}
