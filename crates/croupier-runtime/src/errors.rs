//! Runtime error types.

use croupier_core::Category;
use croupier_modules::{LoadError, ModuleError};

/// A dispatch cycle aborted because a module's notification hook failed.
///
/// Session mutations made by modules notified earlier in the same cycle
/// are kept; there is no rollback, and the cycle state is not rotated.
#[derive(Debug, thiserror::Error)]
#[error("module {module:?} in {category} failed during dispatch")]
pub struct CycleError {
    /// Category that was being notified.
    pub category: Category,
    /// Display name of the failing module.
    pub module: String,
    /// The module's own failure.
    #[source]
    pub source: ModuleError,
}

/// Failure to bring up a marshal from user selections.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// A selected display name is not in the catalogue.
    #[error("no module named {display_name:?} discovered under {category}")]
    ModuleNotFound {
        /// Category the selection targeted.
        category: Category,
        /// Display name the user selected.
        display_name: String,
    },

    /// The loader could not produce a handle for a catalogue entry.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// A loaded module failed its `init` hook.
    #[error("module {module:?} in {category} failed to initialize")]
    Init {
        /// Category the module was selected for.
        category: Category,
        /// Display name of the failing module.
        module: String,
        /// The module's own failure.
        #[source]
        source: ModuleError,
    },
}
