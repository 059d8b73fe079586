//! Interactive prompt loop driving the day tracker.
//!
//! The session owns the only copy of the day in progress: nothing is written
//! before `end day`, so leaving the session mid-day loses that day.

use crate::config::Config;
use crate::core::day::DayLogic;
use crate::core::free_day::FreeDayLogic;
use crate::core::overtime::OvertimeLogic;
use crate::core::sorter::{SortLogic, SortOutcome};
use crate::core::tracker::{DayState, DayTracker};
use crate::errors::{AppError, AppResult};
use crate::ledger::LedgerFiles;
use crate::ledger::codec::{format_date, format_date_time, format_hours};
use crate::ui::messages::{error, info, prompt, success, warning};
use crate::utils::colors::{RESET, color_for_balance};
use crate::utils::formatting::hours2readable;
use crate::utils::time;
use chrono::NaiveDateTime;
use std::io::BufRead;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    StartDay,
    BreakStart,
    BreakEnd,
    EndDay,
    AddFreeDay,
    SortCsv,
    TakeOvertime,
    CurrentOvertime,
    Status,
    Help,
    Quit,
}

const COMMANDS: [(&str, SessionCommand, &str); 11] = [
    ("start day", SessionCommand::StartDay, "Start the work day"),
    ("break start", SessionCommand::BreakStart, "Start a break"),
    ("break end", SessionCommand::BreakEnd, "End a break"),
    ("end day", SessionCommand::EndDay, "End the work day and record it"),
    ("add free day", SessionCommand::AddFreeDay, "Add a free day or a range of free days"),
    ("sort csv", SessionCommand::SortCsv, "Sort the ledger by date"),
    ("take overtime", SessionCommand::TakeOvertime, "Record overtime taken"),
    ("current overtime", SessionCommand::CurrentOvertime, "Display the current overtime"),
    ("status", SessionCommand::Status, "Show the state of the day in progress"),
    ("help", SessionCommand::Help, "Show this list"),
    ("quit", SessionCommand::Quit, "Leave the session"),
];

impl SessionCommand {
    pub fn parse(line: &str) -> Option<Self> {
        let normalized = line.split_whitespace().collect::<Vec<_>>().join(" ");
        let normalized = normalized.to_lowercase();

        if normalized == "exit" {
            return Some(SessionCommand::Quit);
        }

        COMMANDS
            .iter()
            .find(|(name, _, _)| *name == normalized)
            .map(|(_, cmd, _)| *cmd)
    }

    /// Commands after which the session ends, unless they were rejected
    /// by the day state machine or a day is still in progress.
    pub fn ends_session(&self) -> bool {
        matches!(
            self,
            SessionCommand::EndDay
                | SessionCommand::AddFreeDay
                | SessionCommand::TakeOvertime
                | SessionCommand::Quit
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Session<'a, R: BufRead> {
    cfg: &'a Config,
    files: &'a LedgerFiles,
    tracker: DayTracker,
    input: R,
    clock: Box<dyn FnMut() -> NaiveDateTime + 'a>,
}

impl<'a, R: BufRead> Session<'a, R> {
    pub fn new(cfg: &'a Config, files: &'a LedgerFiles, input: R) -> Self {
        Self {
            cfg,
            files,
            tracker: DayTracker::new(),
            input,
            clock: Box::new(time::now),
        }
    }

    /// Replace the wall clock (used by tests).
    pub fn with_clock(mut self, clock: impl FnMut() -> NaiveDateTime + 'a) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn tracker(&self) -> &DayTracker {
        &self.tracker
    }

    pub fn run(&mut self) -> AppResult<()> {
        print_help();

        loop {
            prompt("Enter command: ");
            let Some(line) = self.read_line()? else {
                println!();
                self.warn_unrecorded_day();
                return Ok(());
            };

            if line.is_empty() {
                continue;
            }

            let Some(cmd) = SessionCommand::parse(&line) else {
                warning("Unknown command. Type 'help' for a list of commands.");
                continue;
            };

            if self.dispatch(cmd) == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Execute one command and report its outcome; never fails.
    pub fn dispatch(&mut self, cmd: SessionCommand) -> Flow {
        match self.execute(cmd) {
            Ok(flow) => flow,
            Err(AppError::InvalidTransition(msg)) => {
                warning(msg);
                Flow::Continue
            }
            Err(e) => {
                error(&e);
                if !cmd.ends_session() {
                    return Flow::Continue;
                }
                if self.tracker.state() != DayState::NotStarted {
                    warning("The work day in progress is kept, the session continues.");
                    return Flow::Continue;
                }
                Flow::Exit
            }
        }
    }

    pub fn execute(&mut self, cmd: SessionCommand) -> AppResult<Flow> {
        match cmd {
            SessionCommand::StartDay => {
                let now = (self.clock)();
                if let Some(previous) = self.tracker.start_day(now) {
                    warning(format!(
                        "Discarded the unfinished day started at {}.",
                        format_date_time(previous.start_day)
                    ));
                }
                success(format!("Work day started at {}", format_date_time(now)));
                Ok(Flow::Continue)
            }

            SessionCommand::BreakStart => {
                let now = (self.clock)();
                self.tracker.start_break(now)?;
                success(format!("Break started at {}", format_date_time(now)));
                Ok(Flow::Continue)
            }

            SessionCommand::BreakEnd => {
                let now = (self.clock)();
                let b = self.tracker.end_break(now)?;
                success(format!(
                    "Break ended at {} ({})",
                    format_date_time(now),
                    hours2readable(b.hours(), false, false)
                ));
                Ok(Flow::Continue)
            }

            SessionCommand::EndDay => {
                let now = (self.clock)();
                self.tracker.check_end_day(now)?;

                let question = format!(
                    "Enter a comment for the day (optional, max {} characters): ",
                    self.cfg.max_comment_chars
                );
                let comment = self.ask(&question)?.unwrap_or_default();

                let day = self
                    .tracker
                    .finish(now, &comment, self.cfg.max_comment_chars)?;
                let recorded = DayLogic::record(self.files, self.cfg, &day)?;
                self.tracker.discard();

                success(format!(
                    "Work day ended at {}: {} h worked, {} h of breaks, {} h net.",
                    format_date_time(now),
                    format_hours(recorded.record.work_hours),
                    format_hours(day.break_hours()),
                    format_hours(recorded.record.net_work_hours)
                ));
                print_balance(recorded.balance.balance_hours);
                Ok(Flow::Exit)
            }

            SessionCommand::AddFreeDay => {
                let Some(dates) = self.ask(
                    "Enter the date (DD.MM.YYYY) or date range (DD.MM.YYYY-DD.MM.YYYY) for the free day(s): ",
                )?
                else {
                    return Ok(Flow::Exit);
                };

                // Validate before asking for the comment.
                crate::utils::date::parse_date_or_range(&dates)?;

                let comment = self
                    .ask("Enter a comment for the free day(s) (e.g., 'Vacation'): ")?
                    .unwrap_or_default();

                let records = FreeDayLogic::add(self.files, self.cfg, &dates, &comment)?;
                success(format!(
                    "{} free day(s) added with comment: {}",
                    records.len(),
                    records.first().map(|r| r.comment.as_str()).unwrap_or("")
                ));
                Ok(Flow::Exit)
            }

            SessionCommand::TakeOvertime => {
                let Some(date) = self.ask("Enter the date (DD.MM.YYYY) for the overtime taken: ")?
                else {
                    return Ok(Flow::Exit);
                };
                let date = crate::ledger::codec::parse_date(&date)?;

                let Some(hours) = self.ask(
                    "Enter the number of overtime hours taken (e.g., -8 for a full day): ",
                )?
                else {
                    return Ok(Flow::Exit);
                };
                let hours = crate::ledger::codec::parse_hours(&hours)?;

                let (record, balance) = OvertimeLogic::take(self.files, date, hours)?;
                success(format!(
                    "Overtime of {} hours taken on {}",
                    format_hours(record.net_work_hours),
                    format_date(record.date)
                ));
                print_balance(balance.balance_hours);
                Ok(Flow::Exit)
            }

            SessionCommand::SortCsv => {
                match SortLogic::sort_by_date(self.files)? {
                    SortOutcome::Empty => info("The ledger has no rows to sort."),
                    SortOutcome::AlreadySorted(n) => {
                        info(format!("Ledger already in date order ({n} rows)."))
                    }
                    SortOutcome::Sorted(n) => success(format!("Ledger sorted by date ({n} rows).")),
                }
                Ok(Flow::Continue)
            }

            SessionCommand::CurrentOvertime => {
                let report = OvertimeLogic::current(self.files, self.cfg.overtime_model)?;
                print_balance(report.hours);
                Ok(Flow::Continue)
            }

            SessionCommand::Status => {
                match self.tracker.current() {
                    None => info("No work day in progress."),
                    Some(day) => info(format!(
                        "Day started at {}, {} break(s), currently {}.",
                        format_date_time(day.start_day),
                        day.breaks.len(),
                        self.tracker.state().as_str()
                    )),
                }
                Ok(Flow::Continue)
            }

            SessionCommand::Help => {
                print_help();
                Ok(Flow::Continue)
            }

            SessionCommand::Quit => {
                self.warn_unrecorded_day();
                Ok(Flow::Exit)
            }
        }
    }

    /// Prompt and read one trimmed answer; `None` at end of input.
    fn ask(&mut self, question: &str) -> AppResult<Option<String>> {
        prompt(question);
        self.read_line()
    }

    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn warn_unrecorded_day(&self) {
        if self.tracker.state() != DayState::NotStarted {
            warning("The work day in progress was not ended and has not been recorded.");
        }
    }
}

fn print_balance(hours: f64) {
    println!(
        "Current total overtime: {}{} hours{} ({})",
        color_for_balance(hours),
        format_hours(hours),
        RESET,
        hours2readable(hours, true, false)
    );
}

pub fn print_help() {
    println!("Available commands:");
    for (name, _, about) in COMMANDS {
        println!("  {:<17} - {}", name, about);
    }
}
