//! Per-category ordered module registry.

use croupier_core::Category;
use indexmap::IndexMap;

use crate::traits::Module;

/// Ordered collection of loaded module handles per category.
///
/// Every category is pre-seeded empty at construction. Registration is
/// append-only: order within a category is registration order, which is
/// load order at launch, and nothing is removed during a session.
pub struct ModuleRegistry {
    modules: IndexMap<Category, Vec<Box<dyn Module>>>,
}

impl ModuleRegistry {
    /// Create a registry with all categories present and empty.
    pub fn new() -> Self {
        let mut modules = IndexMap::with_capacity(Category::ALL.len());
        for category in Category::ALL {
            let _ = modules.insert(category, Vec::new());
        }
        Self { modules }
    }

    /// Append a module handle under `category`.
    pub fn register(&mut self, category: Category, module: Box<dyn Module>) {
        tracing::debug!(%category, module = module.name(), "module registered");
        self.modules[&category].push(module);
    }

    /// Mutable access to the handles of one category, in registration
    /// order. Used by the dispatch pipeline to drive notification hooks.
    pub fn modules_mut(&mut self, category: Category) -> &mut [Box<dyn Module>] {
        self.modules[&category].as_mut_slice()
    }

    /// Display names registered under `category`, in registration order.
    pub fn names(&self, category: Category) -> Vec<&str> {
        self.modules[&category].iter().map(|m| m.name()).collect()
    }

    /// Number of handles registered under `category`.
    pub fn count(&self, category: Category) -> usize {
        self.modules[&category].len()
    }

    /// Total number of handles across all categories.
    pub fn len(&self) -> usize {
        self.modules.values().map(Vec::len).sum()
    }

    /// Whether no module has been registered at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ModuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ModuleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (category, handles) in &self.modules {
            let _ = map.key(category);
            let _ = map.value(&handles.iter().map(|m| m.name()).collect::<Vec<_>>());
        }
        map.finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
