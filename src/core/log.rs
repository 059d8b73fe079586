use crate::errors::AppResult;
use crate::ledger::LedgerFiles;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const MAX_OP_WIDTH: usize = 60;

pub fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI regex"));
    re.replace_all(s, "").into_owned()
}

/// Colour per audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "end_day" => Colour::Green,
        "free_day" => Colour::Cyan,
        "take_overtime" => Colour::Yellow,
        "sort" => Colour::Blue,
        "rebuild_overtime" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(files: &LedgerFiles) -> AppResult<()> {
        let entries = files.audit.read_all()?;

        if entries.is_empty() {
            info(format!(
                "Internal log is empty ({}).",
                files.audit.path().display()
            ));
            return Ok(());
        }

        let rows: Vec<(usize, String, String, String)> = entries
            .into_iter()
            .enumerate()
            .map(|(i, e)| {
                let date = chrono::DateTime::parse_from_rfc3339(&e.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(e.date);
                (i + 1, date, render_op(&e.operation, &e.target), e.message)
            })
            .collect();

        let id_w = rows.len().to_string().len();
        let date_w = rows.iter().map(|(_, d, _, _)| d.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|(_, _, op, _)| strip_ansi(op).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);

        println!("📜 Internal log:\n");

        for (id, date, op, message) in rows {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op).chars().count()));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

/// `operation (target)`, truncated to the column limit, only the operation
/// word coloured.
fn render_op(operation: &str, target: &str) -> String {
    let visible = if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    };

    let truncated = if visible.chars().count() > MAX_OP_WIDTH {
        let mut s: String = visible.chars().take(MAX_OP_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        visible
    };

    let color = color_for_operation(operation);
    match truncated.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(truncated.as_str()).to_string(),
    }
}
