//! Conversion between ledger records and their semicolon-separated cells.
//!
//! - dates: `DD.MM.YYYY`
//! - timestamps: `DD.MM.YYYY HH:MM:SS`
//! - hours: two decimals with `,` as decimal separator (`.` accepted on read)
//!
//! A row is the 7 fixed columns followed by zero or more
//! `break start;break end` pairs.

use crate::errors::{AppError, AppResult};
use crate::models::break_interval::ClosedBreak;
use crate::models::record::LedgerRecord;
use chrono::{NaiveDate, NaiveDateTime};
use csv::StringRecord;

pub const DATE_FORMAT: &str = "%d.%m.%Y";
pub const DATE_TIME_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

pub const HEADER: [&str; 7] = [
    "weekday",
    "date",
    "comment",
    "work hours",
    "net work hours",
    "start day",
    "end day",
];

/// Trailing header cells written by older ledgers.
const LEGACY_BREAK_HEADER: [&str; 2] = ["break start", "break end"];

const FIXED_COLUMNS: usize = HEADER.len();

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

pub fn format_date_time(dt: NaiveDateTime) -> String {
    dt.format(DATE_TIME_FORMAT).to_string()
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

pub fn parse_date_time(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), DATE_TIME_FORMAT)
        .map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// `8.5` → `"8,50"`.
pub fn format_hours(h: f64) -> String {
    let h = if h.abs() < 0.005 { 0.0 } else { h };
    format!("{:.2}", h).replacen('.', ",", 1)
}

/// `"8,50"` or `"8.50"` → `8.5`.
pub fn parse_hours(s: &str) -> AppResult<f64> {
    let normalized = s.trim().replacen(',', ".", 1);
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(AppError::InvalidNumber(s.to_string())),
    }
}

/// The value the ledger will actually hold once `h` is written.
pub fn stored_hours(h: f64) -> f64 {
    parse_hours(&format_hours(h)).unwrap_or(h)
}

pub fn header_record() -> StringRecord {
    StringRecord::from(HEADER.to_vec())
}

/// Accept the fixed header, optionally followed by the legacy break columns.
pub fn is_header(row: &StringRecord) -> bool {
    let cells: Vec<&str> = row.iter().map(str::trim).collect();
    match cells.len() {
        FIXED_COLUMNS => cells[..] == HEADER[..],
        9 => {
            cells[..FIXED_COLUMNS] == HEADER[..]
                && cells[FIXED_COLUMNS..] == LEGACY_BREAK_HEADER[..]
        }
        _ => false,
    }
}

pub fn encode(record: &LedgerRecord) -> StringRecord {
    let mut cells: Vec<String> = Vec::with_capacity(record.width());

    cells.push(record.weekday.clone());
    cells.push(format_date(record.date));
    cells.push(record.comment.clone());
    cells.push(format_hours(record.work_hours));
    cells.push(format_hours(record.net_work_hours));
    cells.push(record.start_day.map(format_date_time).unwrap_or_default());
    cells.push(record.end_day.map(format_date_time).unwrap_or_default());

    for b in &record.breaks {
        cells.push(format_date_time(b.start));
        cells.push(format_date_time(b.end));
    }

    StringRecord::from(cells)
}

/// Decode one data row. `line` is only used for error reporting.
pub fn decode(row: &StringRecord, line: usize) -> AppResult<LedgerRecord> {
    if row.len() < FIXED_COLUMNS {
        let reason = format!(
            "expected at least {} columns, found {}",
            FIXED_COLUMNS,
            row.len()
        );
        return Err(malformed(line, reason));
    }

    let cell = |i: usize| row.get(i).unwrap_or("");

    let date = field(line, "date", parse_date(cell(1)))?;
    let work_hours = field(line, "work hours", parse_hours(cell(3)))?;
    let net_work_hours = field(line, "net work hours", parse_hours(cell(4)))?;
    let start_day = field(line, "start day", optional_date_time(cell(5)))?;
    let end_day = field(line, "end day", optional_date_time(cell(6)))?;

    let trailing: Vec<&str> = row.iter().skip(FIXED_COLUMNS).collect();
    if trailing.len() % 2 != 0 {
        let reason = format!("odd number of break cells ({})", trailing.len());
        return Err(malformed(line, reason));
    }

    let mut breaks = Vec::with_capacity(trailing.len() / 2);
    for pair in trailing.chunks(2) {
        let (s, e) = (pair[0].trim(), pair[1].trim());
        if s.is_empty() && e.is_empty() {
            continue;
        }
        breaks.push(ClosedBreak {
            start: field(line, "break start", parse_date_time(s))?,
            end: field(line, "break end", parse_date_time(e))?,
        });
    }

    Ok(LedgerRecord {
        weekday: cell(0).to_string(),
        date,
        comment: cell(2).to_string(),
        work_hours,
        net_work_hours,
        start_day,
        end_day,
        breaks,
    })
}

fn malformed(line: usize, reason: String) -> AppError {
    AppError::MalformedRecord { line, reason }
}

/// Attach the column name and line to a cell-level parse failure.
fn field<T>(line: usize, name: &str, r: AppResult<T>) -> AppResult<T> {
    r.map_err(|e| malformed(line, format!("{name}: {e}")))
}

fn optional_date_time(s: &str) -> AppResult<Option<NaiveDateTime>> {
    if s.trim().is_empty() {
        Ok(None)
    } else {
        parse_date_time(s).map(Some)
    }
}
