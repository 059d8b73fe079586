use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::list::ListLogic;
use crate::errors::AppResult;
use crate::ledger::LedgerFiles;
use crate::utils::date::parse_period;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period } = cmd {
        let files = LedgerFiles::from_config(cfg);

        let bounds = match period.as_deref() {
            None | Some("all") => None,
            Some(p) => Some(parse_period(p)?),
        };

        ListLogic::print(&files, cfg, bounds)?;
    }
    Ok(())
}
