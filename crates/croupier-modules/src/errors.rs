//! Error types for module loading, discovery, and lifecycle hooks.

use std::path::PathBuf;

use croupier_core::Category;

/// Failure raised by a module's own lifecycle hooks.
///
/// Modules are opaque to the host, so their failures are carried as
/// messages rather than typed variants; the host only needs to know which
/// module failed and to abort the cycle.
#[derive(Debug, thiserror::Error)]
pub enum ModuleError {
    /// The module reported a failure from `init` or `input`.
    #[error("{0}")]
    Failed(String),

    /// The module hit an I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl ModuleError {
    /// Convenience constructor for message-only failures.
    pub fn failed(message: impl Into<String>) -> Self {
        ModuleError::Failed(message.into())
    }
}

/// Failure to produce a module handle for a catalogue entry.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// No loadable unit matches the entry's identifier.
    #[error("no module named {display_name:?} under {category}")]
    UnknownModule {
        /// Category the lookup ran under.
        category: Category,
        /// Display name the user selected.
        display_name: String,
    },
}

/// Failure while scanning the module storage tree.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    /// Listing a game subdirectory failed.
    #[error("failed to scan {path}")]
    Scan {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying walk error.
        #[source]
        source: walkdir::Error,
    },

    /// Creating a missing category/game directory failed.
    #[error("failed to create module directory {path}")]
    CreateDir {
        /// Directory being created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
