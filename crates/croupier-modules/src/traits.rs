//! The module lifecycle contract.

use croupier_core::Session;

use crate::errors::ModuleError;

/// Capability set every loadable module must satisfy.
///
/// The host never inspects a module beyond these operations. A module
/// receives `&mut Session` only for the duration of each call and mutates
/// shared state through the session's narrow operations (`add_bet`,
/// message bag, paths).
pub trait Module {
    /// Display name of the module, as shown to users and encoded into its
    /// identifier.
    fn name(&self) -> &str;

    /// Called once at load time, before the module is registered, with the
    /// owning session. A failure here fails the launch of this slot and
    /// the handle is discarded.
    fn init(&mut self, session: &mut Session) -> Result<(), ModuleError>;

    /// Called once per dispatch cycle when the module's category is
    /// reached. The module reads `session.last_input()` and other session
    /// state directly; there is no event-specific payload.
    fn input(&mut self, session: &mut Session) -> Result<(), ModuleError>;
}

impl core::fmt::Debug for dyn Module {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Module").field("name", &self.name()).finish()
    }
}
