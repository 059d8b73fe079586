use crate::utils::time::hours_between;
use chrono::NaiveDateTime;

/// A break taken during the day in progress. `end` stays `None` while the
/// break is open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakInterval {
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

impl BreakInterval {
    pub fn open(start: NaiveDateTime) -> Self {
        Self { start, end: None }
    }

    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }

    /// Closed view of the interval, if it has been terminated.
    pub fn closed(&self) -> Option<ClosedBreak> {
        self.end.map(|end| ClosedBreak {
            start: self.start,
            end,
        })
    }
}

/// A terminated break, as persisted in the trailing ledger columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosedBreak {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ClosedBreak {
    pub fn hours(&self) -> f64 {
        hours_between(self.start, self.end)
    }
}
