//! # croupier-runtime
//!
//! The host's dispatch pipeline and launch sequence.
//!
//! - [`marshal`] — [`BetMarshal`](marshal::BetMarshal), the per-table
//!   pipeline that owns the session and drives module notification
//! - [`launch`] — resolving user selections into an initialized marshal
//!
//! ## Crate Position
//!
//! Depends on: croupier-core, croupier-modules. Depended on by:
//! croupier-cli.

#![deny(unsafe_code)]

pub mod errors;
pub mod launch;
pub mod marshal;

pub use errors::{CycleError, LaunchError};
pub use launch::{LaunchConfig, Selection, launch};
pub use marshal::BetMarshal;
