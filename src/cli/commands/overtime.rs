use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::overtime::{OvertimeLogic, OvertimeReport};
use crate::errors::AppResult;
use crate::ledger::LedgerFiles;
use crate::ledger::codec::format_hours;
use crate::ui::messages::success;
use crate::utils::colors::{RESET, color_for_balance};
use crate::utils::formatting::hours2readable;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Overtime { rebuild, model } = cmd {
        let files = LedgerFiles::from_config(cfg);

        if *rebuild {
            let report = OvertimeLogic::rebuild(&files, cfg)?;
            success(format!(
                "Balance rebuilt from {} ledger row(s).",
                report.rows
            ));
            print_report(&report);
            return Ok(());
        }

        let model = model.unwrap_or(cfg.overtime_model);
        let report = OvertimeLogic::current(&files, model)?;
        print_report(&report);
    }

    Ok(())
}

fn print_report(report: &OvertimeReport) {
    println!(
        "Current total overtime: {}{} hours{} ({}, {})",
        color_for_balance(report.hours),
        format_hours(report.hours),
        RESET,
        hours2readable(report.hours, true, false),
        report.model.as_str()
    );
}
