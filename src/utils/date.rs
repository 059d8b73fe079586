use crate::errors::{AppError, AppResult};
use crate::ledger::codec::parse_date;
use chrono::{Datelike, NaiveDate};

/// Longest range accepted for a single free-day insertion.
pub const MAX_RANGE_DAYS: i64 = 366;

/// Full English weekday name ("Monday" .. "Sunday").
pub fn weekday_name(d: NaiveDate) -> String {
    d.format("%A").to_string()
}

/// Expand `DD.MM.YYYY` or `DD.MM.YYYY-DD.MM.YYYY` into every calendar day
/// it covers, both ends inclusive.
pub fn parse_date_or_range(input: &str) -> AppResult<Vec<NaiveDate>> {
    let input = input.trim();

    let Some((from, to)) = input.split_once('-') else {
        return Ok(vec![parse_date(input)?]);
    };

    let start = parse_date(from.trim())
        .map_err(|_| AppError::InvalidDateRange(input.to_string()))?;
    let end =
        parse_date(to.trim()).map_err(|_| AppError::InvalidDateRange(input.to_string()))?;

    generate_range(start, end).map_err(AppError::InvalidDateRange)
}

pub fn generate_range(start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>, String> {
    if end < start {
        return Err(format!("{} is before {}", end, start));
    }
    if (end - start).num_days() >= MAX_RANGE_DAYS {
        return Err(format!("range longer than {} days", MAX_RANGE_DAYS));
    }

    let mut out = Vec::new();
    let mut d = start;

    while d <= end {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    Ok(out)
}

/// Inclusive bounds of a listing period: a range (any length), `DD.MM.YYYY`,
/// `MM.YYYY` or `YYYY`.
pub fn parse_period(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = p.trim();

    if let Some((from, to)) = p.split_once('-') {
        let bad_range = |_: AppError| AppError::InvalidDateRange(p.to_string());
        let start = parse_date(from.trim()).map_err(bad_range)?;
        let end = parse_date(to.trim()).map_err(bad_range)?;
        if end < start {
            return Err(AppError::InvalidDateRange(format!(
                "{p}: {} is before {}",
                to.trim(),
                from.trim()
            )));
        }
        return Ok((start, end));
    }

    // DD.MM.YYYY
    if let Ok(d) = parse_date(p) {
        return Ok((d, d));
    }

    // MM.YYYY
    if let Some((m, y)) = p.split_once('.')
        && let (Ok(month), Ok(year)) = (m.parse::<u32>(), y.parse::<i32>())
        && let Some(first) = NaiveDate::from_ymd_opt(year, month, 1)
    {
        return Ok((first, last_day_of_month(first)));
    }

    // YYYY
    if let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(AppError::InvalidDate(p.to_string()))
}

fn last_day_of_month(first: NaiveDate) -> NaiveDate {
    let (y, m) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };

    NaiveDate::from_ymd_opt(y, m, 1)
        .and_then(|d| d.pred_opt())
        .unwrap_or(first)
}
