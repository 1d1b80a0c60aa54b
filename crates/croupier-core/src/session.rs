//! Per-launch session state.
//!
//! One [`Session`] exists per launched table and is exclusively owned by
//! its dispatch pipeline. Modules never hold the session; they receive
//! `&mut Session` for the duration of their own notified turn and mutate it
//! only through the narrow operations here, which preserves the invariant
//! that the current bet line is always the canonical serialization of the
//! current bet map.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde_json::Value;

use crate::betline::{self, BetMap};

/// Name of the path entry pointing at the host's root directory.
pub const FRAMEWORK_PATH: &str = "framework";

/// Shared state for one betting session.
#[derive(Debug, Clone)]
pub struct Session {
    balance: Decimal,
    base_unit: Decimal,
    current_bet_line: String,
    previous_bet_line: String,
    current_bets: BetMap,
    previous_bets: BetMap,
    messages: HashMap<String, Value>,
    paths: HashMap<String, PathBuf>,
    last_input: Option<String>,
    game: String,
}

impl Session {
    /// Create a fresh session for `game`, seeding the `framework` root path.
    pub fn new(game: impl Into<String>, framework_root: impl Into<PathBuf>) -> Self {
        let mut paths = HashMap::new();
        let _ = paths.insert(FRAMEWORK_PATH.to_owned(), framework_root.into());
        Self {
            balance: Decimal::ZERO,
            base_unit: Decimal::ONE,
            current_bet_line: String::new(),
            previous_bet_line: String::new(),
            current_bets: BetMap::new(),
            previous_bets: BetMap::new(),
            messages: HashMap::new(),
            paths,
            last_input: None,
            game: game.into(),
        }
    }

    /// The active game this session was launched for.
    pub fn game(&self) -> &str {
        &self.game
    }

    /// Current balance. Non-negative by convention, not enforced.
    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// Set the current balance.
    pub fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }

    /// Base betting unit.
    pub fn base_unit(&self) -> Decimal {
        self.base_unit
    }

    /// Set the base betting unit.
    pub fn set_base_unit(&mut self, base_unit: Decimal) {
        self.base_unit = base_unit;
    }

    /// Most recent raw external input, if any event has been dispatched.
    pub fn last_input(&self) -> Option<&str> {
        self.last_input.as_deref()
    }

    /// Record the raw input for the cycle being dispatched.
    pub fn set_last_input(&mut self, input: impl Into<String>) {
        self.last_input = Some(input.into());
    }

    /// Canonical serialized form of the current bet map.
    pub fn current_bet_line(&self) -> &str {
        &self.current_bet_line
    }

    /// Bet line as it stood at the end of the previous cycle.
    pub fn previous_bet_line(&self) -> &str {
        &self.previous_bet_line
    }

    /// Current selector → amount aggregate.
    pub fn current_bets(&self) -> &BetMap {
        &self.current_bets
    }

    /// Bet map as it stood at the end of the previous cycle.
    pub fn previous_bets(&self) -> &BetMap {
        &self.previous_bets
    }

    /// Fold one `amount@selector` token into the current bets and rebuild
    /// the bet line. Malformed tokens are silently ignored; returns whether
    /// the token was applied.
    pub fn add_bet(&mut self, token: &str) -> bool {
        if betline::add_contribution(&mut self.current_bets, token) {
            self.current_bet_line = betline::serialize(&self.current_bets);
            true
        } else {
            false
        }
    }

    /// Read an inter-module message.
    pub fn message(&self, name: &str) -> Option<&Value> {
        self.messages.get(name)
    }

    /// Write an inter-module message, replacing any previous value.
    pub fn set_message(&mut self, name: impl Into<String>, value: Value) {
        let _ = self.messages.insert(name.into(), value);
    }

    /// Look up a named filesystem path.
    pub fn path(&self, name: &str) -> Option<&Path> {
        self.paths.get(name).map(PathBuf::as_path)
    }

    /// Register a named filesystem path.
    pub fn set_path(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) {
        let _ = self.paths.insert(name.into(), path.into());
    }

    /// Rotate cycle state: the current bet line and bets become the
    /// previous ones by value, and the current accumulators are left empty.
    ///
    /// Called by the dispatch pipeline after all categories have been
    /// notified; mutating the current bets afterwards cannot retroactively
    /// change the previous snapshot.
    pub fn rotate_cycle(&mut self) {
        self.previous_bet_line = std::mem::take(&mut self.current_bet_line);
        self.previous_bets = std::mem::take(&mut self.current_bets);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
