//! State machine for the day currently being worked.
//!
//! ```text
//! NotStarted --start_day--> Working --start_break--> OnBreak
//!                              ^                        |
//!                              +-------end_break--------+
//! Working --end_day--> (CompletedDay) + NotStarted
//! ```
//!
//! `start_day` is accepted from any state and discards the day in progress.
//! Every rejected transition leaves the tracker untouched.

use crate::errors::{AppError, AppResult};
use crate::models::break_interval::{BreakInterval, ClosedBreak};
use crate::models::work_day::{CompletedDay, WorkDay};
use crate::utils::time::{hours_between, truncate_chars};
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayState {
    NotStarted,
    Working,
    OnBreak,
}

impl DayState {
    pub fn as_str(&self) -> &'static str {
        match self {
            DayState::NotStarted => "not started",
            DayState::Working => "working",
            DayState::OnBreak => "on break",
        }
    }
}

/// Session context holding the in-memory work day.
#[derive(Debug, Default)]
pub struct DayTracker {
    day: Option<WorkDay>,
}

impl DayTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DayState {
        match &self.day {
            None => DayState::NotStarted,
            Some(day) if day.is_on_break() => DayState::OnBreak,
            Some(_) => DayState::Working,
        }
    }

    pub fn current(&self) -> Option<&WorkDay> {
        self.day.as_ref()
    }

    /// Start a fresh day. Returns the day that was discarded, if any.
    pub fn start_day(&mut self, now: NaiveDateTime) -> Option<WorkDay> {
        self.day.replace(WorkDay::new(now))
    }

    pub fn start_break(&mut self, now: NaiveDateTime) -> AppResult<()> {
        let day = match self.state() {
            DayState::Working => self.day_mut()?,
            DayState::OnBreak => return Err(rejected("You are already in a break.")),
            DayState::NotStarted => {
                return Err(rejected("The work day has not been started yet."));
            }
        };

        let after = day.breaks.last().and_then(|b| b.end).unwrap_or(day.start_day);
        if now < after {
            return Err(rejected("A break cannot start before the previous event."));
        }

        day.breaks.push(BreakInterval::open(now));
        Ok(())
    }

    /// Close the open break and return it.
    pub fn end_break(&mut self, now: NaiveDateTime) -> AppResult<ClosedBreak> {
        if self.state() != DayState::OnBreak {
            return Err(rejected("You are not in a break."));
        }

        let day = self.day_mut()?;
        let last = day
            .breaks
            .last_mut()
            .ok_or_else(|| rejected("You are not in a break."))?;

        if now < last.start {
            return Err(rejected("A break cannot end before it started."));
        }

        last.end = Some(now);
        Ok(ClosedBreak {
            start: last.start,
            end: now,
        })
    }

    /// Finish the day: compute gross and net hours, reset to `NotStarted`.
    pub fn end_day(
        &mut self,
        now: NaiveDateTime,
        comment: &str,
        max_comment_chars: usize,
    ) -> AppResult<CompletedDay> {
        let completed = self.finish(now, comment, max_comment_chars)?;
        self.discard();
        Ok(completed)
    }

    /// Compute the completed day. The day stays in progress until `discard`.
    pub fn finish(
        &mut self,
        now: NaiveDateTime,
        comment: &str,
        max_comment_chars: usize,
    ) -> AppResult<CompletedDay> {
        self.check_end_day(now)?;

        let day = self.day_mut()?;
        day.end_day = Some(now);
        day.comment = truncate_chars(comment.trim(), max_comment_chars);

        let breaks: Vec<ClosedBreak> = day.breaks.iter().filter_map(|b| b.closed()).collect();
        let work_hours = hours_between(day.start_day, now);

        let mut completed = CompletedDay {
            start_day: day.start_day,
            end_day: now,
            breaks,
            comment: day.comment.clone(),
            work_hours,
            net_work_hours: 0.0,
        };
        completed.net_work_hours = work_hours - completed.break_hours();

        Ok(completed)
    }

    /// Drop the day in progress.
    pub fn discard(&mut self) -> Option<WorkDay> {
        self.day.take()
    }

    /// Whether `end_day(now, ..)` would be accepted.
    pub fn check_end_day(&self, now: NaiveDateTime) -> AppResult<()> {
        let day = match (self.state(), &self.day) {
            (DayState::Working, Some(day)) => day,
            (DayState::OnBreak, _) => {
                return Err(rejected(
                    "You are still in a break. End the break before ending the day.",
                ));
            }
            _ => return Err(rejected("The work day has not been started yet.")),
        };

        let last_event = day.breaks.last().and_then(|b| b.end).unwrap_or(day.start_day);
        if now < last_event {
            return Err(rejected("The day cannot end before its last event."));
        }
        Ok(())
    }

    fn day_mut(&mut self) -> AppResult<&mut WorkDay> {
        self.day
            .as_mut()
            .ok_or_else(|| rejected("The work day has not been started yet."))
    }
}

fn rejected(msg: &str) -> AppError {
    AppError::InvalidTransition(msg.to_string())
}
