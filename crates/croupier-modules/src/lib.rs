//! # croupier-modules
//!
//! Module contract, registry, discovery, and loading for the croupier host.
//!
//! - [`traits`] — the [`Module`](traits::Module) capability set (`init`,
//!   `input`) every loadable unit must satisfy
//! - [`registry`] — per-category, append-only ordered module handles
//! - [`discovery`] — on-disk catalogue scanning with active-game precedence
//! - [`loader`] — the [`ModuleLoader`](loader::ModuleLoader) seam and the
//!   compile-time [`BuiltinLoader`](loader::BuiltinLoader)
//! - [`testing`] — shared recording/scripted modules for tests
//!
//! ## Crate Position
//!
//! Depends on: croupier-core. Depended on by: croupier-runtime.

#![deny(unsafe_code)]

pub mod discovery;
pub mod errors;
pub mod loader;
pub mod registry;
pub mod testing;
pub mod traits;

pub use discovery::{Catalogue, CatalogueEntry, scan};
pub use errors::{DiscoveryError, LoadError, ModuleError};
pub use loader::{BuiltinLoader, ModuleLoader};
pub use registry::ModuleRegistry;
pub use traits::Module;
