//! Settings loading with deep merge and environment overrides.

use std::path::Path;

use serde_json::Value;

use crate::errors::{Result, SettingsError};
use crate::types::CroupierSettings;

/// Load settings from a JSON file, deep-merged over compiled defaults,
/// with `CROUPIER_*` environment overrides applied last.
///
/// A missing file yields defaults with a warning. A file that exists but
/// cannot be read or parsed is an error.
pub fn load_settings_from_path(path: &Path) -> Result<CroupierSettings> {
    let mut settings = if path.exists() {
        let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file: Value = serde_json::from_str(&raw).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let mut merged = serde_json::to_value(CroupierSettings::default())
            .map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        deep_merge(&mut merged, file);

        serde_json::from_value(merged).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        tracing::warn!(path = %path.display(), "settings file not found, using defaults");
        CroupierSettings::default()
    };

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

/// Recursively merge `overlay` into `base`.
///
/// Objects merge key by key; any other value in the overlay replaces the
/// base value outright. `null` in the overlay is ignored so a partial
/// file cannot knock out a default.
pub fn deep_merge(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, value) in overlay_map {
                if value.is_null() {
                    continue;
                }
                match base_map.get_mut(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => {
                        let _ = base_map.insert(key, value);
                    }
                }
            }
        }
        (base, overlay) => {
            if !overlay.is_null() {
                *base = overlay;
            }
        }
    }
}

fn apply_env_overrides(
    settings: &mut CroupierSettings,
    var: impl Fn(&str) -> Option<String>,
) {
    if let Some(game) = var("CROUPIER_GAME") {
        tracing::debug!(game, "game overridden from environment");
        settings.game = game;
    }
    if let Some(root) = var("CROUPIER_MODULES_ROOT") {
        settings.modules_root = root.into();
    }
    if let Some(level) = var("CROUPIER_LOG") {
        settings.logging.level = level;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_settings(json: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, json).unwrap();
        (dir, path)
    }

    // ── deep_merge ──

    #[test]
    fn merge_overrides_scalars_and_keeps_others() {
        let mut base = serde_json::json!({ "game": "Roulette", "balance": "0" });
        deep_merge(&mut base, serde_json::json!({ "game": "Baccarat" }));
        assert_eq!(base, serde_json::json!({ "game": "Baccarat", "balance": "0" }));
    }

    #[test]
    fn merge_recurses_into_objects() {
        let mut base = serde_json::json!({ "logging": { "level": "info" }, "game": "Roulette" });
        deep_merge(&mut base, serde_json::json!({ "logging": { "level": "debug" } }));
        assert_eq!(base["logging"]["level"], "debug");
        assert_eq!(base["game"], "Roulette");
    }

    #[test]
    fn merge_ignores_null_overlay_values() {
        let mut base = serde_json::json!({ "game": "Roulette" });
        deep_merge(&mut base, serde_json::json!({ "game": null }));
        assert_eq!(base["game"], "Roulette");
    }

    #[test]
    fn merge_replaces_arrays_wholesale() {
        let mut base = serde_json::json!({ "knownGames": ["Roulette", "Baccarat"] });
        deep_merge(&mut base, serde_json::json!({ "knownGames": ["Craps"] }));
        assert_eq!(base["knownGames"], serde_json::json!(["Craps"]));
    }

    // ── load_settings_from_path ──

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = load_settings_from_path(&dir.path().join("nope.json")).unwrap();
        assert_eq!(settings.game, "Roulette");
    }

    #[test]
    fn partial_file_merges_over_defaults() {
        let (_dir, path) =
            write_settings(r#"{ "game": "Baccarat", "logging": { "level": "debug" } }"#);
        let settings = load_settings_from_path(&path).unwrap();
        assert_eq!(settings.game, "Baccarat");
        assert_eq!(settings.logging.level, "debug");
        // Untouched fields keep their defaults.
        assert_eq!(settings.known_games, vec!["Roulette", "Baccarat"]);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let (_dir, path) = write_settings("{ not json");
        let err = load_settings_from_path(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn wrong_schema_is_an_error() {
        let (_dir, path) = write_settings(r#"{ "balance": { "nested": true } }"#);
        let err = load_settings_from_path(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    // ── env overrides ──

    #[test]
    fn env_overrides_beat_file_values() {
        let mut settings = CroupierSettings::default();
        apply_env_overrides(&mut settings, |name| match name {
            "CROUPIER_GAME" => Some("Baccarat".to_string()),
            "CROUPIER_MODULES_ROOT" => Some("/srv/modules".to_string()),
            "CROUPIER_LOG" => Some("trace".to_string()),
            _ => None,
        });

        assert_eq!(settings.game, "Baccarat");
        assert_eq!(settings.modules_root, PathBuf::from("/srv/modules"));
        assert_eq!(settings.logging.level, "trace");
    }

    #[test]
    fn absent_env_leaves_settings_alone() {
        let mut settings = CroupierSettings::default();
        apply_env_overrides(&mut settings, |_| None);
        assert_eq!(settings.game, "Roulette");
    }
}
