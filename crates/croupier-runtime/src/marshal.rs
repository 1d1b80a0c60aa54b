//! The per-table dispatch pipeline.

use croupier_core::{Category, Session};
use croupier_modules::{Module, ModuleRegistry};

use crate::errors::CycleError;

/// Owns one session and the modules loaded for it, and drives the
/// synchronous notification pipeline for each external event.
///
/// Dispatch is strictly ordered: bet selection, then money management,
/// then display, then output, and within each category registration
/// order. Every hook runs to completion before the next is called; a
/// hook failure aborts the cycle where it stands.
pub struct BetMarshal {
    session: Session,
    registry: ModuleRegistry,
}

impl BetMarshal {
    /// Create a marshal over a fresh session with no modules.
    pub fn new(session: Session) -> Self {
        Self {
            session,
            registry: ModuleRegistry::new(),
        }
    }

    /// Read access to the session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable access to the session, for host-side configuration such as
    /// seeding the balance before the first cycle.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Modules currently registered, per category.
    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Append an already-initialized module under `category`.
    pub fn register_module(&mut self, category: Category, module: Box<dyn Module>) {
        self.registry.register(category, module);
    }

    /// Fold one `amount@selector` token into the current cycle's bets.
    /// Returns whether the token was applied.
    pub fn add_bet(&mut self, token: &str) -> bool {
        self.session.add_bet(token)
    }

    /// Dispatch one external event through the pipeline.
    ///
    /// Records `raw` as the cycle's input, notifies every registered
    /// module in dispatch order, and on success rotates the session's
    /// cycle state so this cycle's bets become the previous ones. On a
    /// hook failure the cycle aborts immediately: later modules are not
    /// notified, earlier mutations are kept, and the state is not rotated.
    pub fn input(&mut self, raw: &str) -> Result<(), CycleError> {
        tracing::debug!(input = raw, "dispatching event");
        self.session.set_last_input(raw);

        for category in Category::BROADCAST_ORDER {
            for module in self.registry.modules_mut(category) {
                module
                    .input(&mut self.session)
                    .map_err(|source| CycleError {
                        category,
                        module: module.name().to_owned(),
                        source,
                    })?;
            }
        }

        tracing::debug!(bet_line = self.session.current_bet_line(), "cycle complete");
        self.session.rotate_cycle();
        Ok(())
    }
}

impl std::fmt::Debug for BetMarshal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BetMarshal")
            .field("game", &self.session.game())
            .field("registry", &self.registry)
            .finish()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
