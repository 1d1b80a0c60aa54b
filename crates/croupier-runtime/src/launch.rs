//! Bringing a table up from user selections.

use std::path::PathBuf;

use croupier_core::{Category, Session};
use croupier_modules::{Catalogue, ModuleLoader};
use rust_decimal::Decimal;

use crate::errors::LaunchError;
use crate::marshal::BetMarshal;

/// One user choice: a display name for a category slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Category slot being filled.
    pub category: Category,
    /// Display name of the chosen module.
    pub display_name: String,
}

impl Selection {
    /// Convenience constructor.
    pub fn new(category: Category, display_name: impl Into<String>) -> Self {
        Self {
            category,
            display_name: display_name.into(),
        }
    }
}

/// Session parameters for a launch, typically derived from settings.
#[derive(Debug, Clone)]
pub struct LaunchConfig {
    /// Active game name.
    pub game: String,
    /// Host root directory, seeded as the session's `framework` path.
    pub framework_root: PathBuf,
    /// Starting balance.
    pub balance: Decimal,
    /// Base betting unit.
    pub base_unit: Decimal,
}

/// Resolve, load, initialize, and register the selected modules, returning
/// a marshal ready to dispatch events.
///
/// Selections are processed in scanned-category order, and within a
/// category in the order given. Any failing slot aborts the launch; a
/// handle that fails `init` is never registered.
pub fn launch(
    selections: &[Selection],
    catalogue: &Catalogue,
    loader: &dyn ModuleLoader,
    config: &LaunchConfig,
) -> Result<BetMarshal, LaunchError> {
    let mut session = Session::new(config.game.clone(), config.framework_root.clone());
    session.set_balance(config.balance);
    session.set_base_unit(config.base_unit);
    let mut marshal = BetMarshal::new(session);

    for category in Category::SCANNED {
        for selection in selections.iter().filter(|s| s.category == category) {
            let entry = catalogue
                .get(category, &selection.display_name)
                .ok_or_else(|| LaunchError::ModuleNotFound {
                    category,
                    display_name: selection.display_name.clone(),
                })?;

            let mut module = loader.load(entry)?;
            module
                .init(marshal.session_mut())
                .map_err(|source| LaunchError::Init {
                    category,
                    module: selection.display_name.clone(),
                    source,
                })?;

            tracing::info!(%category, module = selection.display_name, "module initialized");
            marshal.register_module(category, module);
        }
    }

    Ok(marshal)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
