//! Overtime balance: two derivations over the ledger plus the persisted
//! incremental balance.

use crate::config::{Config, OvertimeModel};
use crate::errors::{AppError, AppResult};
use crate::ledger::LedgerFiles;
use crate::ledger::balance::Balance;
use crate::ledger::codec::{format_date, format_hours, parse_date, parse_hours};
use crate::models::record::LedgerRecord;
use crate::models::record_kind::RecordKind;
use chrono::NaiveDate;

/// Sum of the net-hours column, taken verbatim for every row shape.
pub fn ledger_sum(records: &[LedgerRecord]) -> f64 {
    records.iter().map(|r| r.net_work_hours).sum()
}

/// Hours above (or below) the standard day, accumulated over history:
/// worked rows give `net - standard`, overtime-taken rows their delta,
/// free days nothing.
pub fn incremental_balance(records: &[LedgerRecord], standard_day_hours: f64) -> f64 {
    records
        .iter()
        .map(|r| match r.kind() {
            RecordKind::Worked => r.net_work_hours - standard_day_hours,
            RecordKind::OvertimeTaken => r.net_work_hours,
            RecordKind::FreeDay => 0.0,
        })
        .sum()
}

#[derive(Debug, Clone, PartialEq)]
pub struct OvertimeReport {
    pub model: OvertimeModel,
    pub hours: f64,
    pub rows: usize,
}

pub struct OvertimeLogic;

impl OvertimeLogic {
    /// Record a withdrawal (usually negative) from the balance on `date`.
    pub fn take(
        files: &LedgerFiles,
        date: NaiveDate,
        hours: f64,
    ) -> AppResult<(LedgerRecord, Balance)> {
        let current = files.balance.load()?;
        let record = LedgerRecord::overtime_taken(date, hours);
        files.store.append(std::slice::from_ref(&record))?;

        let balance = files.balance.apply_delta(&current, hours)?;

        files.audit.note(
            "take_overtime",
            &format_date(date),
            &format!(
                "{} h taken, balance {} h",
                format_hours(hours),
                format_hours(balance.balance_hours)
            ),
        );

        Ok((record, balance))
    }

    /// Parse the raw `date` / `hours` answers, then `take`.
    pub fn take_from_input(
        files: &LedgerFiles,
        date: &str,
        hours: &str,
    ) -> AppResult<(LedgerRecord, Balance)> {
        let date = parse_date(date)?;
        let hours = parse_hours(hours)?;
        Self::take(files, date, hours)
    }

    pub fn current(files: &LedgerFiles, model: OvertimeModel) -> AppResult<OvertimeReport> {
        match model {
            OvertimeModel::LedgerSum => {
                let records = files.store.read_all()?;
                Ok(OvertimeReport {
                    model,
                    hours: ledger_sum(&records),
                    rows: records.len(),
                })
            }
            OvertimeModel::Incremental => {
                let balance = files.balance.load()?;
                Ok(OvertimeReport {
                    model,
                    hours: balance.balance_hours,
                    rows: 0,
                })
            }
        }
    }

    /// Recompute the incremental balance from the whole ledger and persist it.
    pub fn rebuild(files: &LedgerFiles, cfg: &Config) -> AppResult<OvertimeReport> {
        let records = files.store.read_all()?;
        let hours = incremental_balance(&records, cfg.standard_day_hours);

        if !hours.is_finite() {
            return Err(AppError::InvalidNumber(format!("{hours}")));
        }

        let balance = files.balance.store(hours)?;
        files.audit.note(
            "rebuild_overtime",
            &files.balance.path().display().to_string(),
            &format!(
                "{} row(s), balance {} h",
                records.len(),
                format_hours(balance.balance_hours)
            ),
        );

        Ok(OvertimeReport {
            model: OvertimeModel::Incremental,
            hours: balance.balance_hours,
            rows: records.len(),
        })
    }
}
