use crate::config::Config;
use crate::core::sorter::{SortLogic, SortOutcome};
use crate::errors::AppResult;
use crate::ledger::LedgerFiles;
use crate::ui::messages::{info, success};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let files = LedgerFiles::from_config(cfg);

    match SortLogic::sort_by_date(&files)? {
        SortOutcome::Empty => info("The ledger has no rows to sort."),
        SortOutcome::AlreadySorted(n) => info(format!("Ledger already in date order ({n} rows).")),
        SortOutcome::Sorted(n) => success(format!("Ledger sorted by date ({n} rows).")),
    }

    Ok(())
}
