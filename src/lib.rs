//! worktime library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod ledger;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        None | Some(Commands::Session) => cli::commands::session::handle(cfg),
        Some(Commands::Init) => cli::commands::init::handle(cli, cfg),
        Some(cmd @ Commands::Config { .. }) => cli::commands::config::handle(cmd, cfg),
        Some(cmd @ Commands::FreeDay { .. }) => cli::commands::free_day::handle(cmd, cfg),
        Some(cmd @ Commands::TakeOvertime { .. }) => {
            cli::commands::take_overtime::handle(cmd, cfg)
        }
        Some(Commands::Sort) => cli::commands::sort::handle(cfg),
        Some(cmd @ Commands::Overtime { .. }) => cli::commands::overtime::handle(cmd, cfg),
        Some(cmd @ Commands::List { .. }) => cli::commands::list::handle(cmd, cfg),
        Some(cmd @ Commands::Log { .. }) => cli::commands::log::handle(cmd, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line override of the ledger path
    if let Some(custom_ledger) = &cli.ledger {
        cfg.ledger = custom_ledger.clone();
    }

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
