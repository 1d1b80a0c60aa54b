//! Module categories and their fixed orderings.
//!
//! The category set is closed: modules can only be registered under one of
//! the seven roles below. Two orderings matter and are both fixed at compile
//! time — the broadcast order used by the dispatch pipeline, and the scan
//! order used by on-disk discovery (`Loop` has no storage directory).

use serde::{Deserialize, Serialize};

/// Functional role a module is registered under.
///
/// `Loop`, `Utilities`, and `Input` are registered but are not part of the
/// per-input-event broadcast set; they are addressed by other entry points
/// (e.g. periodic ticks) outside the dispatch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    /// Loop-notification modules (periodic, never broadcast per input).
    Loop,
    /// Utility modules.
    Utilities,
    /// Input-capture modules.
    Input,
    /// Bet selection modules (first notified on each input).
    BetSelection,
    /// Money management modules.
    MoneyManagement,
    /// Display modules.
    Display,
    /// Output modules (last notified on each input).
    Output,
}

impl Category {
    /// Every category, in registry seeding order.
    pub const ALL: [Category; 7] = [
        Category::Loop,
        Category::Utilities,
        Category::Input,
        Category::BetSelection,
        Category::MoneyManagement,
        Category::Display,
        Category::Output,
    ];

    /// Categories notified on each input event, in notification order.
    pub const BROADCAST_ORDER: [Category; 4] = [
        Category::BetSelection,
        Category::MoneyManagement,
        Category::Display,
        Category::Output,
    ];

    /// Categories with an on-disk module directory, in scan order.
    pub const SCANNED: [Category; 6] = [
        Category::Utilities,
        Category::Input,
        Category::BetSelection,
        Category::MoneyManagement,
        Category::Display,
        Category::Output,
    ];

    /// Storage directory segment for this category.
    pub fn dir_name(self) -> &'static str {
        match self {
            Category::Loop => "Loop",
            Category::Utilities => "Utilities",
            Category::Input => "Input",
            Category::BetSelection => "BetSelection",
            Category::MoneyManagement => "MoneyManagement",
            Category::Display => "Display",
            Category::Output => "Output",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown module category: {0}")]
pub struct ParseCategoryError(pub String);

impl std::str::FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Loop" => Ok(Category::Loop),
            "Utilities" => Ok(Category::Utilities),
            "Input" => Ok(Category::Input),
            "BetSelection" => Ok(Category::BetSelection),
            "MoneyManagement" => Ok(Category::MoneyManagement),
            "Display" => Ok(Category::Display),
            "Output" => Ok(Category::Output),
            other => Err(ParseCategoryError(other.to_owned())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
