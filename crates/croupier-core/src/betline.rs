//! Bet-line wire codec.
//!
//! Grammar: `line := token ("|" token)*`, `token := amount "@" selector`,
//! where `amount` is a fixed-point decimal and `selector` is any non-empty
//! string without `@` or `|`. Duplicate selectors sum their amounts.
//!
//! Serialization order is first-insertion order and deterministic: feeding
//! the same token sequence always produces the same line, so downstream
//! modules that re-parse the line see stable formatting.

use std::str::FromStr;

use indexmap::IndexMap;
use rust_decimal::Decimal;

/// Aggregate bet state for one dispatch cycle: selector → summed amount.
pub type BetMap = IndexMap<String, Decimal>;

/// Fold one `amount@selector` token into the bet map.
///
/// Malformed tokens — no `@`, empty selector, unparsable amount — are
/// silently ignored and leave the map untouched. Returns whether the token
/// was applied. Anything after a second `@` is dropped, keeping the second
/// field as the selector.
pub fn add_contribution(bets: &mut BetMap, token: &str) -> bool {
    let mut fields = token.split('@');
    let (Some(amount_text), Some(selector)) = (fields.next(), fields.next()) else {
        tracing::debug!(token, "ignoring bet token without selector");
        return false;
    };
    if selector.is_empty() {
        tracing::debug!(token, "ignoring bet token with empty selector");
        return false;
    }
    let Ok(amount) = Decimal::from_str(amount_text) else {
        tracing::debug!(token, "ignoring bet token with unparsable amount");
        return false;
    };

    *bets.entry(selector.to_owned()).or_insert(Decimal::ZERO) += amount;
    true
}

/// Serialize the bet map back into canonical wire form.
///
/// Tokens appear in first-insertion order, joined with `|`; an empty map
/// yields the empty string.
pub fn serialize(bets: &BetMap) -> String {
    bets.iter()
        .map(|(selector, amount)| format!("{amount}@{selector}"))
        .collect::<Vec<_>>()
        .join("|")
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
