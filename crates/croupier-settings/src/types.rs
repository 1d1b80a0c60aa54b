//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` and implement
//! [`Default`] with production default values. Types carry
//! `#[serde(default)]` so partial JSON is accepted — missing fields get
//! their default value during deserialization.

use std::path::PathBuf;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Root settings type for the croupier host.
///
/// # JSON Format
///
/// All field names are camelCase. Example:
///
/// ```json
/// {
///   "game": "Baccarat",
///   "modulesRoot": "/srv/croupier/modules",
///   "balance": "250",
///   "logging": { "level": "debug" }
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CroupierSettings {
    /// Settings schema version.
    pub version: String,
    /// Active game; selects which game subdirectories the scan prefers.
    pub game: String,
    /// Games the host knows about; used when seeding the module
    /// directory skeleton.
    pub known_games: Vec<String>,
    /// Root of the on-disk module storage tree.
    pub modules_root: PathBuf,
    /// Starting balance for launched sessions.
    pub balance: Decimal,
    /// Base betting unit for launched sessions.
    pub base_unit: Decimal,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

impl Default for CroupierSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            game: "Roulette".to_string(),
            known_games: vec!["Roulette".to_string(), "Baccarat".to_string()],
            modules_root: PathBuf::from("modules"),
            balance: Decimal::ZERO,
            base_unit: Decimal::ONE,
            logging: LoggingSettings::default(),
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Default filter directive when `CROUPIER_LOG` is unset.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_values() {
        let settings = CroupierSettings::default();
        assert_eq!(settings.game, "Roulette");
        assert_eq!(settings.known_games, vec!["Roulette", "Baccarat"]);
        assert_eq!(settings.balance, Decimal::ZERO);
        assert_eq!(settings.base_unit, Decimal::ONE);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let settings: CroupierSettings =
            serde_json::from_str(r#"{ "game": "Baccarat" }"#).unwrap();
        assert_eq!(settings.game, "Baccarat");
        assert_eq!(settings.modules_root, PathBuf::from("modules"));
    }

    #[test]
    fn camel_case_field_names() {
        let settings: CroupierSettings =
            serde_json::from_str(r#"{ "modulesRoot": "/srv/modules", "baseUnit": "2.5" }"#)
                .unwrap();
        assert_eq!(settings.modules_root, PathBuf::from("/srv/modules"));
        assert_eq!(settings.base_unit.to_string(), "2.5");
    }
}
