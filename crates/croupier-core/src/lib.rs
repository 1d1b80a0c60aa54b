//! # croupier-core
//!
//! Foundation types and codecs for the croupier module host.
//!
//! This crate provides the shared vocabulary the rest of the workspace
//! depends on:
//!
//! - **Categories**: [`category::Category`], the closed set of functional
//!   roles a module can be registered under, with the fixed broadcast order
//! - **Identifier codec**: [`ident::encode`] / [`ident::decode`], the
//!   reversible escape scheme mapping display names to path-safe identifiers
//! - **Bet-line codec**: [`betline`], the `amount@selector` pipe-joined wire
//!   format with duplicate-selector summing
//! - **Session state**: [`session::Session`], the per-launch state owned by
//!   the dispatch pipeline
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other croupier crates.

#![deny(unsafe_code)]

pub mod betline;
pub mod category;
pub mod ident;
pub mod session;

pub use betline::BetMap;
pub use category::Category;
pub use session::{FRAMEWORK_PATH, Session};
