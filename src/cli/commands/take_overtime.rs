use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::overtime::OvertimeLogic;
use crate::errors::AppResult;
use crate::ledger::LedgerFiles;
use crate::ledger::codec::{format_date, format_hours};
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::TakeOvertime { date, hours } = cmd {
        let files = LedgerFiles::from_config(cfg);
        let (record, balance) = OvertimeLogic::take_from_input(&files, date, hours)?;

        success(format!(
            "Overtime of {} hours taken on {}",
            format_hours(record.net_work_hours),
            format_date(record.date)
        ));
        info(format!(
            "Running balance: {} hours",
            format_hours(balance.balance_hours)
        ));
    }

    Ok(())
}
