use super::break_interval::ClosedBreak;
use super::record_kind::RecordKind;
use super::work_day::CompletedDay;
use crate::utils::date::weekday_name;
use chrono::{NaiveDate, NaiveDateTime};

/// Comment written on every overtime-taken row.
pub const OVERTIME_TAKEN_COMMENT: &str = "Overtime taken";

/// One persisted ledger row.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerRecord {
    /// English weekday name of `date`
    pub weekday: String,
    pub date: NaiveDate,
    pub comment: String,
    /// Gross hours between start and end of day
    pub work_hours: f64,
    /// Net hours for worked days, the signed delta for overtime taken
    pub net_work_hours: f64,
    pub start_day: Option<NaiveDateTime>,
    pub end_day: Option<NaiveDateTime>,
    /// Trailing `break start;break end` pairs, chronological
    pub breaks: Vec<ClosedBreak>,
}

impl LedgerRecord {
    pub fn worked(day: &CompletedDay) -> Self {
        let date = day.start_day.date();
        Self {
            weekday: weekday_name(date),
            date,
            comment: day.comment.clone(),
            work_hours: day.work_hours,
            net_work_hours: day.net_work_hours,
            start_day: Some(day.start_day),
            end_day: Some(day.end_day),
            breaks: day.breaks.clone(),
        }
    }

    pub fn free_day(date: NaiveDate, comment: &str) -> Self {
        Self {
            weekday: weekday_name(date),
            date,
            comment: comment.to_string(),
            work_hours: 0.0,
            net_work_hours: 0.0,
            start_day: None,
            end_day: None,
            breaks: Vec::new(),
        }
    }

    pub fn overtime_taken(date: NaiveDate, hours: f64) -> Self {
        Self {
            weekday: weekday_name(date),
            date,
            comment: OVERTIME_TAKEN_COMMENT.to_string(),
            work_hours: 0.0,
            net_work_hours: hours,
            start_day: None,
            end_day: None,
            breaks: Vec::new(),
        }
    }

    /// Classify the row by its shape.
    pub fn kind(&self) -> RecordKind {
        if self.start_day.is_some() && self.end_day.is_some() {
            RecordKind::Worked
        } else if self.comment == OVERTIME_TAKEN_COMMENT {
            RecordKind::OvertimeTaken
        } else {
            RecordKind::FreeDay
        }
    }

    /// Number of cells this record occupies on disk.
    pub fn width(&self) -> usize {
        7 + 2 * self.breaks.len()
    }
}
