use crate::config::Config;
use crate::errors::AppResult;
use crate::ledger::LedgerFiles;
use crate::ledger::balance::Balance;
use crate::ledger::codec::{format_date, format_hours};
use crate::models::record::LedgerRecord;
use crate::models::work_day::CompletedDay;

/// What `end day` persisted.
#[derive(Debug, Clone)]
pub struct RecordedDay {
    pub record: LedgerRecord,
    pub balance: Balance,
}

/// High-level business logic for closing a work day.
pub struct DayLogic;

impl DayLogic {
    /// Append the finished day to the ledger, then move the running
    /// balance by `net - standard`. The balance is read first: if it cannot
    /// be read, nothing is appended.
    pub fn record(
        files: &LedgerFiles,
        cfg: &Config,
        day: &CompletedDay,
    ) -> AppResult<RecordedDay> {
        let current = files.balance.load()?;
        let record = LedgerRecord::worked(day);
        files.store.append(std::slice::from_ref(&record))?;

        let delta = day.net_work_hours - cfg.standard_day_hours;
        let balance = files.balance.apply_delta(&current, delta)?;

        files.audit.note(
            "end_day",
            &format_date(record.date),
            &format!(
                "work {} h, net {} h, {} break(s), balance {} h",
                format_hours(record.work_hours),
                format_hours(record.net_work_hours),
                record.breaks.len(),
                format_hours(balance.balance_hours),
            ),
        );

        Ok(RecordedDay { record, balance })
    }
}
