use crate::config::Config;
use crate::errors::AppResult;
use crate::ledger::LedgerFiles;
use crate::ledger::codec::format_date;
use crate::models::record::LedgerRecord;
use crate::utils::date::parse_date_or_range;
use crate::utils::time::truncate_chars;

pub struct FreeDayLogic;

impl FreeDayLogic {
    /// Add one zero-hour row per calendar day of `date_or_range`.
    /// The input is fully validated before anything is written.
    pub fn add(
        files: &LedgerFiles,
        cfg: &Config,
        date_or_range: &str,
        comment: &str,
    ) -> AppResult<Vec<LedgerRecord>> {
        let dates = parse_date_or_range(date_or_range)?;
        let comment = truncate_chars(comment.trim(), cfg.max_comment_chars);

        let records: Vec<LedgerRecord> = dates
            .iter()
            .map(|d| LedgerRecord::free_day(*d, &comment))
            .collect();

        files.store.append(&records)?;

        let target = match (records.first(), records.last()) {
            (Some(first), Some(last)) if records.len() > 1 => {
                format!("{}-{}", format_date(first.date), format_date(last.date))
            }
            (Some(first), _) => format_date(first.date),
            _ => String::new(),
        };
        files.audit.note(
            "free_day",
            &target,
            &format!("{} free day(s): {}", records.len(), comment),
        );

        Ok(records)
    }
}
