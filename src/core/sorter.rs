use crate::errors::AppResult;
use crate::ledger::LedgerFiles;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOutcome {
    /// Nothing but (at most) the header.
    Empty,
    AlreadySorted(usize),
    Sorted(usize),
}

pub struct SortLogic;

impl SortLogic {
    /// Order data rows by date, keeping same-day rows in their original
    /// order, and rewrite the ledger. A malformed row fails the whole sort
    /// and leaves the file as it was.
    pub fn sort_by_date(files: &LedgerFiles) -> AppResult<SortOutcome> {
        let mut records = files.store.read_all()?;

        if records.is_empty() {
            return Ok(SortOutcome::Empty);
        }

        let already_sorted = records.windows(2).all(|w| w[0].date <= w[1].date);

        // Vec::sort_by_key is stable
        records.sort_by_key(|r| r.date);
        files.store.rewrite(&records)?;

        let n = records.len();
        if already_sorted {
            return Ok(SortOutcome::AlreadySorted(n));
        }

        files.audit.note(
            "sort",
            &files.store.path().display().to_string(),
            &format!("{n} row(s) sorted by date"),
        );

        Ok(SortOutcome::Sorted(n))
    }
}
