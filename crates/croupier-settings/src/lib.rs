//! # croupier-settings
//!
//! Configuration management with layered sources for the croupier host.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults** — [`CroupierSettings::default()`]
//! 2. **Settings file** — JSON, deep-merged over defaults
//! 3. **Environment variables** — `CROUPIER_*` overrides (highest priority)
//!
//! A missing settings file is not an error; defaults apply. A present but
//! malformed file is an error, so a typo never silently reverts the host
//! to defaults.
//!
//! ## Crate Position
//!
//! No internal deps. Depended on by: croupier-cli.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings_from_path};
pub use types::{CroupierSettings, LoggingSettings};
