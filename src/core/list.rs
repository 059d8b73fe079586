use crate::config::Config;
use crate::core::overtime::{incremental_balance, ledger_sum};
use crate::errors::AppResult;
use crate::ledger::LedgerFiles;
use crate::ledger::codec::{format_date, format_hours};
use crate::models::record::LedgerRecord;
use crate::models::record_kind::RecordKind;
use crate::ui::messages::{header, info};
use crate::utils::colors::{CYAN, MAGENTA, RESET, color_for_balance, colorize_optional};
use crate::utils::formatting::{bold, hours2readable};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub struct ListLogic;

impl ListLogic {
    /// Rows whose date lies within `bounds` (inclusive), all rows if `None`.
    pub fn load(
        files: &LedgerFiles,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<Vec<LedgerRecord>> {
        let records = files.store.read_all()?;
        Ok(match bounds {
            None => records,
            Some((from, to)) => records
                .into_iter()
                .filter(|r| r.date >= from && r.date <= to)
                .collect(),
        })
    }

    pub fn print(
        files: &LedgerFiles,
        cfg: &Config,
        bounds: Option<(NaiveDate, NaiveDate)>,
    ) -> AppResult<()> {
        let records = Self::load(files, bounds)?;

        if records.is_empty() {
            info("No ledger rows for the selected period.");
            return Ok(());
        }

        header(files.store.path().display());

        let mut table = Table::new(vec![
            Column::new("Date", 10),
            Column::new("Weekday", 9),
            Column::new("Kind", 4),
            Column::new("Start", 5),
            Column::new("End", 5),
            Column::new("Breaks", 6),
            Column::new("Work", 6),
            Column::new("Net", 6),
            Column::new("Comment", 7),
        ]);

        for r in &records {
            table.add_row(render_row(r));
        }

        print!("{}", table.render());

        let legend: Vec<String> = [
            RecordKind::Worked,
            RecordKind::FreeDay,
            RecordKind::OvertimeTaken,
        ]
        .iter()
        .map(|k| format!("{} = {}", k.code(), k.label()))
        .collect();
        println!("{}", legend.join(", "));

        let worked: f64 = records
            .iter()
            .filter(|r| r.kind() == RecordKind::Worked)
            .map(|r| r.net_work_hours)
            .sum();
        let delta = incremental_balance(&records, cfg.standard_day_hours);

        println!();
        println!("{} {} h", bold("Net worked:"), format_hours(worked));
        println!(
            "{} {} h (ledger sum {} h)",
            bold("Overtime in period:"),
            format!(
                "{}{}{}",
                color_for_balance(delta),
                hours2readable(delta, true, false),
                RESET
            ),
            format_hours(ledger_sum(&records))
        );

        Ok(())
    }
}

fn render_row(r: &LedgerRecord) -> Vec<String> {
    let time = |t: Option<chrono::NaiveDateTime>| {
        t.map(|t| t.format("%H:%M").to_string())
            .unwrap_or_else(|| "--:--".to_string())
    };

    let kind = match r.kind() {
        RecordKind::Worked => r.kind().code().to_string(),
        RecordKind::FreeDay => format!("{CYAN}{}{RESET}", r.kind().code()),
        RecordKind::OvertimeTaken => format!("{MAGENTA}{}{RESET}", r.kind().code()),
    };

    let breaks = if r.breaks.is_empty() {
        String::new()
    } else {
        let hours: f64 = r.breaks.iter().map(|b| b.hours()).sum();
        format!("{} ({})", r.breaks.len(), hours2readable(hours, false, true))
    };

    vec![
        format_date(r.date),
        r.weekday.clone(),
        kind,
        colorize_optional(&time(r.start_day)),
        colorize_optional(&time(r.end_day)),
        breaks,
        format_hours(r.work_hours),
        format_hours(r.net_work_hours),
        r.comment.clone(),
    ]
}
