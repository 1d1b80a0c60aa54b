//! Shared module doubles for host and pipeline tests.

use std::cell::RefCell;
use std::rc::Rc;

use croupier_core::Session;

use crate::errors::ModuleError;
use crate::traits::Module;

/// Shared call log written by [`RecordingModule`] handles.
pub type CallLog = Rc<RefCell<Vec<String>>>;

/// Module that appends its name to a shared log every time its `input`
/// hook runs. Used to assert dispatch order.
pub struct RecordingModule {
    name: String,
    log: CallLog,
}

impl RecordingModule {
    /// Create a recording module and a handle to its call log.
    pub fn new(name: impl Into<String>) -> (Self, CallLog) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let module = Self::with_log(name, Rc::clone(&log));
        (module, log)
    }

    /// Create a recording module writing into an existing log, so several
    /// modules can record into one sequence.
    pub fn with_log(name: impl Into<String>, log: CallLog) -> Self {
        Self {
            name: name.into(),
            log,
        }
    }
}

impl Module for RecordingModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn init(&mut self, _session: &mut Session) -> Result<(), ModuleError> {
        self.log.borrow_mut().push(format!("{}:init", self.name));
        Ok(())
    }

    fn input(&mut self, _session: &mut Session) -> Result<(), ModuleError> {
        self.log.borrow_mut().push(self.name.clone());
        Ok(())
    }
}

/// Module that places a fixed list of bet tokens on every `input` call
/// and then optionally fails.
pub struct ScriptedModule {
    name: String,
    bets: Vec<String>,
    fail_with: Option<String>,
}

impl ScriptedModule {
    /// Module that contributes `bets` on each cycle.
    pub fn new(name: impl Into<String>, bets: Vec<String>) -> Self {
        Self {
            name: name.into(),
            bets,
            fail_with: None,
        }
    }

    /// Module whose `input` hook always fails with `message`.
    pub fn failing(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bets: Vec::new(),
            fail_with: Some(message.into()),
        }
    }
}

impl Module for ScriptedModule {
    fn name(&self) -> &str {
        &self.name
    }

    fn init(&mut self, _session: &mut Session) -> Result<(), ModuleError> {
        Ok(())
    }

    fn input(&mut self, session: &mut Session) -> Result<(), ModuleError> {
        for bet in &self.bets {
            let _ = session.add_bet(bet);
        }
        match &self.fail_with {
            Some(message) => Err(ModuleError::failed(message.clone())),
            None => Ok(()),
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
    fn recording_module_logs_calls() {
        let (mut module, log) = RecordingModule::new("Probe");
        let mut session = Session::new("Roulette", "/tmp/modules");

        module.init(&mut session).unwrap();
        module.input(&mut session).unwrap();
        module.input(&mut session).unwrap();

        assert_eq!(*log.borrow(), vec!["Probe:init", "Probe", "Probe"]);
    }

    #[test]
    fn scripted_module_places_bets() {
        let mut module = ScriptedModule::new("Flat", vec!["5@Red".into()]);
        let mut session = Session::new("Roulette", "/tmp/modules");

        module.input(&mut session).unwrap();
        assert_eq!(session.current_bet_line(), "5@Red");
    }

    #[test]
    fn failing_module_reports_its_message() {
        let mut module = ScriptedModule::failing("Broken", "no table");
        let mut session = Session::new("Roulette", "/tmp/modules");

        let err = module.input(&mut session).unwrap_err();
        assert_eq!(err.to_string(), "no table");
    }
}
