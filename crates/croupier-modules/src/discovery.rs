//! On-disk module discovery.
//!
//! Storage layout: one directory per scanned category, each containing one
//! subdirectory per known game plus the game-agnostic `Multigame` fallback,
//! each holding zero or more module binaries named by their encoded
//! identifier. A scan lists the active game's subdirectory first, then the
//! fallback, deduplicating by identifier so the active-game build of a
//! module shadows its multigame build.

use std::path::{Path, PathBuf};

use croupier_core::{Category, ident};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use walkdir::WalkDir;

use crate::errors::DiscoveryError;

/// Game-agnostic fallback subdirectory name.
pub const FALLBACK_GAME: &str = "Multigame";

/// File extensions recognized as module binaries.
const MODULE_EXTENSIONS: [&str; 3] = ["dll", "so", "dylib"];

/// One discovered module binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogueEntry {
    /// Category directory the binary was found under.
    pub category: Category,
    /// Game subdirectory it was found in (active game or `Multigame`).
    pub game_scope: String,
    /// Encoded identifier (the binary's file stem).
    pub identifier: String,
    /// Decoded human-readable name.
    pub display_name: String,
    /// Absolute path to the binary.
    pub path: PathBuf,
}

/// Catalogue of discovered modules, ordered per category by scan order.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    entries: IndexMap<Category, IndexMap<String, CatalogueEntry>>,
}

impl Catalogue {
    /// Resolve a user-facing display name to its catalogue entry.
    pub fn get(&self, category: Category, display_name: &str) -> Option<&CatalogueEntry> {
        let identifier = ident::encode(display_name);
        self.entries.get(&category)?.get(&identifier)
    }

    /// Entries discovered under `category`, in scan order.
    pub fn entries(&self, category: Category) -> impl Iterator<Item = &CatalogueEntry> {
        self.entries.get(&category).into_iter().flat_map(IndexMap::values)
    }

    /// Total number of discovered modules.
    pub fn len(&self) -> usize {
        self.entries.values().map(IndexMap::len).sum()
    }

    /// Whether the scan found no modules at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn contains(&self, category: Category, identifier: &str) -> bool {
        self.entries
            .get(&category)
            .is_some_and(|m| m.contains_key(identifier))
    }

    fn insert(&mut self, entry: CatalogueEntry) {
        let _ = self
            .entries
            .entry(entry.category)
            .or_default()
            .insert(entry.identifier.clone(), entry);
    }
}

/// Scan the module storage tree under `root` for the given active game.
///
/// A missing category directory is created together with one subdirectory
/// per known game plus the fallback, and contributes no entries to this
/// scan. Non-UTF-8 file names and files without a module extension are
/// skipped.
pub fn scan(
    root: &Path,
    active_game: &str,
    known_games: &[String],
) -> Result<Catalogue, DiscoveryError> {
    let mut catalogue = Catalogue::default();

    for category in Category::SCANNED {
        let category_dir = root.join(category.dir_name());
        if category_dir.is_dir() {
            for game in [upper_first(active_game), FALLBACK_GAME.to_owned()] {
                scan_game_dir(&mut catalogue, category, &category_dir, &game)?;
            }
        } else {
            create_skeleton(&category_dir, known_games)?;
            tracing::info!(%category, path = %category_dir.display(), "created module directory skeleton");
        }
    }

    tracing::debug!(modules = catalogue.len(), game = active_game, "module scan complete");
    Ok(catalogue)
}

fn scan_game_dir(
    catalogue: &mut Catalogue,
    category: Category,
    category_dir: &Path,
    game: &str,
) -> Result<(), DiscoveryError> {
    let game_dir = category_dir.join(game);
    if !game_dir.is_dir() {
        return Ok(());
    }

    for entry in WalkDir::new(&game_dir).min_depth(1).max_depth(1).sort_by_file_name() {
        let entry = entry.map_err(|source| DiscoveryError::Scan {
            path: game_dir.clone(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let has_module_ext = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| MODULE_EXTENSIONS.contains(&e));
        if !has_module_ext {
            continue;
        }
        let Some(identifier) = path.file_stem().and_then(|s| s.to_str()) else {
            tracing::warn!(path = %path.display(), "skipping module with non-UTF-8 name");
            continue;
        };

        if catalogue.contains(category, identifier) {
            tracing::debug!(%category, identifier, game, "duplicate identifier shadowed");
            continue;
        }

        catalogue.insert(CatalogueEntry {
            category,
            game_scope: game.to_owned(),
            identifier: identifier.to_owned(),
            display_name: ident::decode(identifier),
            path: path.to_path_buf(),
        });
    }

    Ok(())
}

fn create_skeleton(category_dir: &Path, known_games: &[String]) -> Result<(), DiscoveryError> {
    let mut subdirs: Vec<String> = known_games.iter().map(|g| upper_first(g)).collect();
    subdirs.push(FALLBACK_GAME.to_owned());

    for subdir in subdirs {
        let path = category_dir.join(subdir);
        std::fs::create_dir_all(&path)
            .map_err(|source| DiscoveryError::CreateDir { path, source })?;
    }
    Ok(())
}

/// Title-case a game name: first letter upper, rest lower.
fn upper_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
