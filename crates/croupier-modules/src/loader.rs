//! Turning catalogue entries into live module handles.

use std::collections::HashMap;

use crate::discovery::CatalogueEntry;
use crate::errors::LoadError;
use crate::traits::Module;

/// Factory producing a fresh module handle.
pub type ModuleFactory = Box<dyn Fn() -> Box<dyn Module>>;

/// Seam between the catalogue and live module handles.
///
/// The host resolves user selections against the catalogue and hands each
/// entry to a loader. Swapping the loader swaps the packaging of modules
/// without touching dispatch.
pub trait ModuleLoader {
    /// Produce a fresh, uninitialized handle for `entry`.
    fn load(&self, entry: &CatalogueEntry) -> Result<Box<dyn Module>, LoadError>;
}

/// Loader backed by a compile-time factory table keyed by encoded
/// identifier.
///
/// Catalogue entries whose identifier has no registered factory fail with
/// [`LoadError::UnknownModule`]; the on-disk binary is treated as a
/// placeholder for an implementation this build does not carry.
#[derive(Default)]
pub struct BuiltinLoader {
    factories: HashMap<String, ModuleFactory>,
}

impl BuiltinLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under an encoded identifier. A later
    /// registration under the same identifier replaces the earlier one.
    pub fn register<F, M>(&mut self, identifier: impl Into<String>, factory: F)
    where
        F: Fn() -> M + 'static,
        M: Module + 'static,
    {
        let _ = self
            .factories
            .insert(identifier.into(), Box::new(move || Box::new(factory())));
    }

    /// Whether a factory is registered under `identifier`.
    pub fn contains(&self, identifier: &str) -> bool {
        self.factories.contains_key(identifier)
    }
}

impl ModuleLoader for BuiltinLoader {
    fn load(&self, entry: &CatalogueEntry) -> Result<Box<dyn Module>, LoadError> {
        match self.factories.get(&entry.identifier) {
            Some(factory) => {
                tracing::debug!(
                    category = %entry.category,
                    identifier = entry.identifier,
                    "module loaded"
                );
                Ok(factory())
            }
            None => Err(LoadError::UnknownModule {
                category: entry.category,
                display_name: entry.display_name.clone(),
            }),
        }
    }
}

impl std::fmt::Debug for BuiltinLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuiltinLoader")
            .field("identifiers", &self.factories.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use croupier_core::Category;

    use super::*;
    use crate::testing::RecordingModule;

    fn entry(identifier: &str, display_name: &str) -> CatalogueEntry {
        CatalogueEntry {
            category: Category::BetSelection,
            game_scope: "Roulette".into(),
            identifier: identifier.into(),
            display_name: display_name.into(),
            path: format!("/modules/BetSelection/Roulette/{identifier}.dll").into(),
        }
    }

    #[test]
    fn registered_factory_produces_fresh_handles() {
        let mut loader = BuiltinLoader::new();
        loader.register("Flat__Bet", || RecordingModule::new("Flat Bet").0);

        let entry = entry("Flat__Bet", "Flat Bet");
        let first = loader.load(&entry).unwrap();
        let second = loader.load(&entry).unwrap();
        assert_eq!(first.name(), "Flat Bet");
        assert_eq!(second.name(), "Flat Bet");
    }

    #[test]
    fn unknown_identifier_is_an_error() {
        let loader = BuiltinLoader::new();
        let err = loader.load(&entry("Paroli", "Paroli")).unwrap_err();
        match err {
            LoadError::UnknownModule {
                category,
                display_name,
            } => {
                assert_eq!(category, Category::BetSelection);
                assert_eq!(display_name, "Paroli");
            }
        }
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let mut loader = BuiltinLoader::new();
        loader.register("Paroli", || RecordingModule::new("Old").0);
        loader.register("Paroli", || RecordingModule::new("New").0);

        let handle = loader.load(&entry("Paroli", "Paroli")).unwrap();
        assert_eq!(handle.name(), "New");
    }
}
