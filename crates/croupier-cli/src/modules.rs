//! Builtin module implementations.
//!
//! These are the modules compiled into the host itself. A module still
//! has to be present in the on-disk catalogue to be selectable; the
//! binary file there acts as the marker, the implementation comes from
//! the loader's factory table.

use std::io::Write;

use croupier_core::{FRAMEWORK_PATH, Session};
use croupier_modules::{BuiltinLoader, Module, ModuleError};

/// Loader preloaded with every builtin module.
pub fn builtin_loader() -> BuiltinLoader {
    let mut loader = BuiltinLoader::new();
    loader.register("Flat__Bet", || FlatBet);
    loader.register("Console__Display", || ConsoleDisplay);
    loader.register("Bet__Logger", || BetLogger);
    loader
}

/// Flat betting: one base unit on red, every cycle.
struct FlatBet;

impl Module for FlatBet {
    fn name(&self) -> &str {
        "Flat Bet"
    }

    fn init(&mut self, _session: &mut Session) -> Result<(), ModuleError> {
        Ok(())
    }

    fn input(&mut self, session: &mut Session) -> Result<(), ModuleError> {
        let token = format!("{}@Red", session.base_unit());
        let _ = session.add_bet(&token);
        Ok(())
    }
}

/// Prints the table state to stdout after the betting categories have run.
struct ConsoleDisplay;

impl Module for ConsoleDisplay {
    fn name(&self) -> &str {
        "Console Display"
    }

    fn init(&mut self, _session: &mut Session) -> Result<(), ModuleError> {
        Ok(())
    }

    fn input(&mut self, session: &mut Session) -> Result<(), ModuleError> {
        println!(
            "bets: {}  balance: {}",
            session.current_bet_line(),
            session.balance()
        );
        Ok(())
    }
}

/// Appends one line per cycle to `bets.log` under the framework root.
struct BetLogger;

impl Module for BetLogger {
    fn name(&self) -> &str {
        "Bet Logger"
    }

    fn init(&mut self, session: &mut Session) -> Result<(), ModuleError> {
        if let Some(root) = session.path(FRAMEWORK_PATH) {
            std::fs::create_dir_all(root)?;
        }
        Ok(())
    }

    fn input(&mut self, session: &mut Session) -> Result<(), ModuleError> {
        let Some(root) = session.path(FRAMEWORK_PATH) else {
            return Err(ModuleError::failed("framework path not set"));
        };
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(root.join("bets.log"))?;
        writeln!(
            file,
            "{}\t{}",
            session.last_input().unwrap_or_default(),
            session.current_bet_line()
        )?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_bet_places_one_unit_on_red() {
        let mut session = Session::new("Roulette", "/tmp/croupier");
        let mut module = FlatBet;

        module.input(&mut session).unwrap();
        assert_eq!(session.current_bet_line(), "1@Red");

        // Same stake again next cycle.
        session.rotate_cycle();
        module.input(&mut session).unwrap();
        assert_eq!(session.current_bet_line(), "1@Red");
    }

    #[test]
    fn bet_logger_appends_cycle_lines() {
        let root = tempfile::tempdir().unwrap();
        let mut session = Session::new("Roulette", root.path());
        let mut module = BetLogger;

        module.init(&mut session).unwrap();
        session.set_last_input("spin:17");
        let _ = session.add_bet("5@Red");
        module.input(&mut session).unwrap();

        let log = std::fs::read_to_string(root.path().join("bets.log")).unwrap();
        assert_eq!(log, "spin:17\t5@Red\n");
    }

    #[test]
    fn builtin_loader_knows_every_builtin() {
        let loader = builtin_loader();
        for identifier in ["Flat__Bet", "Console__Display", "Bet__Logger"] {
            assert!(loader.contains(identifier), "missing {identifier}");
        }
    }
}
