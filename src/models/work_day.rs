use super::break_interval::{BreakInterval, ClosedBreak};
use chrono::NaiveDateTime;

/// The day currently being worked. Lives only in memory: it is never
/// persisted before `end day`.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkDay {
    pub start_day: NaiveDateTime,
    pub end_day: Option<NaiveDateTime>,
    pub breaks: Vec<BreakInterval>, // chronological
    pub comment: String,
}

impl WorkDay {
    pub fn new(start_day: NaiveDateTime) -> Self {
        Self {
            start_day,
            end_day: None,
            breaks: Vec::new(),
            comment: String::new(),
        }
    }

    /// The open break, if any. Only the last break may be open.
    pub fn open_break(&self) -> Option<&BreakInterval> {
        self.breaks.last().filter(|b| b.is_open())
    }

    pub fn is_on_break(&self) -> bool {
        self.open_break().is_some()
    }
}

/// A finished day, ready to be encoded as a ledger row.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedDay {
    pub start_day: NaiveDateTime,
    pub end_day: NaiveDateTime,
    pub breaks: Vec<ClosedBreak>,
    pub comment: String,
    pub work_hours: f64,
    pub net_work_hours: f64,
}

impl CompletedDay {
    pub fn break_hours(&self) -> f64 {
        self.breaks.iter().map(ClosedBreak::hours).sum()
    }
}
