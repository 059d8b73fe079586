use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::free_day::FreeDayLogic;
use crate::errors::AppResult;
use crate::ledger::LedgerFiles;
use crate::ledger::codec::format_date;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::FreeDay { dates, comment } = cmd {
        let files = LedgerFiles::from_config(cfg);
        let records = FreeDayLogic::add(&files, cfg, dates, comment)?;

        for r in &records {
            success(format!("Free day {} ({}) added.", format_date(r.date), r.weekday));
        }
    }

    Ok(())
}
