use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::ledger::LedgerFiles;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let files = LedgerFiles::from_config(cfg);
        LogLogic::print_log(&files)?;
    }

    Ok(())
}
