//! Command-line driver for the croupier betting host.
//!
//! `croupier list` scans the module storage tree and prints the catalogue;
//! `croupier run` launches a table with the selected modules and feeds
//! stdin lines through the dispatch pipeline.

#![deny(unsafe_code)]

use std::io::BufRead;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use croupier_core::Category;
use croupier_modules::scan;
use croupier_runtime::{LaunchConfig, Selection, launch};
use croupier_settings::{CroupierSettings, load_settings_from_path};
use tracing_subscriber::EnvFilter;

mod modules;

#[derive(Debug, Parser)]
#[command(name = "croupier", about = "Modular betting session host")]
struct Args {
    /// Path to the settings file.
    #[arg(long, default_value = "croupier.json")]
    settings: PathBuf,

    /// Override the active game from settings.
    #[arg(long)]
    game: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Scan the module tree and print the catalogue per category.
    List,

    /// Launch a table and dispatch stdin lines as input events.
    Run {
        /// Module selection as `Category:Display Name`; repeatable.
        #[arg(long = "module", value_parser = parse_selection)]
        modules: Vec<Selection>,
    },
}

fn parse_selection(raw: &str) -> Result<Selection, String> {
    let (category, display_name) = raw
        .split_once(':')
        .ok_or_else(|| format!("expected `Category:Display Name`, got {raw:?}"))?;
    let category = Category::from_str(category.trim()).map_err(|e| e.to_string())?;
    let display_name = display_name.trim();
    if display_name.is_empty() {
        return Err(format!("missing display name in {raw:?}"));
    }
    Ok(Selection::new(category, display_name))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut settings = load_settings_from_path(&args.settings)
        .with_context(|| format!("failed to load settings from {}", args.settings.display()))?;
    if let Some(game) = args.game {
        settings.game = game;
    }
    init_tracing(&settings);

    match args.command {
        Command::List => list(&settings),
        Command::Run { modules } => run(&settings, &modules),
    }
}

fn init_tracing(settings: &CroupierSettings) {
    let filter = EnvFilter::try_from_env("CROUPIER_LOG")
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn list(settings: &CroupierSettings) -> Result<()> {
    let catalogue = scan(&settings.modules_root, &settings.game, &settings.known_games)
        .with_context(|| {
            format!("failed to scan modules under {}", settings.modules_root.display())
        })?;

    let loader = modules::builtin_loader();
    for category in Category::SCANNED {
        println!("{category}");
        let mut any = false;
        for entry in catalogue.entries(category) {
            let marker = if loader.contains(&entry.identifier) {
                ""
            } else {
                "  (no implementation)"
            };
            println!("  {}  [{}]{}", entry.display_name, entry.game_scope, marker);
            any = true;
        }
        if !any {
            println!("  (none)");
        }
    }
    Ok(())
}

fn run(settings: &CroupierSettings, selections: &[Selection]) -> Result<()> {
    let catalogue = scan(&settings.modules_root, &settings.game, &settings.known_games)
        .with_context(|| {
            format!("failed to scan modules under {}", settings.modules_root.display())
        })?;

    let loader = modules::builtin_loader();
    let config = LaunchConfig {
        game: settings.game.clone(),
        framework_root: std::env::current_dir().context("failed to resolve working directory")?,
        balance: settings.balance,
        base_unit: settings.base_unit,
    };
    let mut marshal =
        launch(selections, &catalogue, &loader, &config).context("failed to launch session")?;

    tracing::info!(game = settings.game, modules = marshal.registry().len(), "session started");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read input")?;
        let event = line.trim();
        if event.is_empty() {
            continue;
        }
        match marshal.input(event) {
            Ok(()) => println!("{}", marshal.session().previous_bet_line()),
            Err(err) => tracing::error!(error = %err, "cycle aborted"),
        }
    }

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_parses_category_and_name() {
        let selection = parse_selection("BetSelection:Flat Bet").unwrap();
        assert_eq!(selection.category, Category::BetSelection);
        assert_eq!(selection.display_name, "Flat Bet");
    }

    #[test]
    fn selection_trims_whitespace() {
        let selection = parse_selection("Display : Console Display").unwrap();
        assert_eq!(selection.category, Category::Display);
        assert_eq!(selection.display_name, "Console Display");
    }

    #[test]
    fn selection_rejects_bad_shapes() {
        assert!(parse_selection("no-colon-here").is_err());
        assert!(parse_selection("NotACategory:Thing").is_err());
        assert!(parse_selection("Display:").is_err());
    }
}
