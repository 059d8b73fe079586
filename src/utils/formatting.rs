//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Signed hours as `+02h 30m` / `-01h 15m` (or `+02:30` when `short`).
pub fn hours2readable(hours: f64, want_sign: bool, short: bool) -> String {
    let total_minutes = (hours * 60.0).round() as i64;
    let abs_m = total_minutes.abs();
    let h = abs_m / 60;
    let m = abs_m % 60;

    let sign = if total_minutes > 0 && want_sign {
        "+"
    } else if total_minutes < 0 {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, h, m)
    } else {
        format!("{}{:02}h {:02}m", sign, h, m)
    }
}
