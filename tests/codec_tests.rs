mod common;
use chrono::NaiveDate;
use common::dt;
use csv::StringRecord;
use worktime::errors::AppError;
use worktime::ledger::codec::{
    decode, encode, format_hours, is_header, parse_date, parse_hours,
};
use worktime::models::break_interval::ClosedBreak;
use worktime::models::record::LedgerRecord;
use worktime::models::record_kind::RecordKind;
use worktime::models::work_day::CompletedDay;

fn row(cells: &[&str]) -> StringRecord {
    StringRecord::from(cells.to_vec())
}

#[test]
fn test_hours_use_comma_and_two_decimals() {
    assert_eq!(format_hours(8.5), "8,50");
    assert_eq!(format_hours(-8.0), "-8,00");
    assert_eq!(format_hours(0.0), "0,00");
    assert_eq!(format_hours(-0.001), "0,00");
    assert_eq!(format_hours(7.999), "8,00");
}

#[test]
fn test_hours_parse_comma_or_dot() {
    assert_eq!(parse_hours("8,50").unwrap(), 8.5);
    assert_eq!(parse_hours("0.00").unwrap(), 0.0);
    assert_eq!(parse_hours(" -8 ").unwrap(), -8.0);
    assert!(matches!(parse_hours("eight"), Err(AppError::InvalidNumber(_))));
    assert!(parse_hours("").is_err());
    assert!(parse_hours("NaN").is_err());
}

#[test]
fn test_hours_survive_format_parse_within_a_hundredth() {
    for x in [0.0, 0.004, 1.0 / 3.0, 7.25, 8.125, -3.333, 23.999, -12.5] {
        let back = parse_hours(&format_hours(x)).unwrap();
        assert!((back - x).abs() <= 0.01, "{x} came back as {back}");
    }
}

#[test]
fn test_parse_date_rejects_other_formats() {
    assert_eq!(
        parse_date("03.01.2025").unwrap(),
        NaiveDate::from_ymd_opt(2025, 1, 3).unwrap()
    );
    assert!(matches!(parse_date("2025-01-03"), Err(AppError::InvalidDate(_))));
    assert!(parse_date("31.02.2025").is_err());
}

#[test]
fn test_worked_day_encodes_breaks_as_trailing_pairs() {
    let day = CompletedDay {
        start_day: dt("15.01.2025 08:00:00"),
        end_day: dt("15.01.2025 16:30:00"),
        breaks: vec![ClosedBreak {
            start: dt("15.01.2025 10:00:00"),
            end: dt("15.01.2025 10:30:00"),
        }],
        comment: "ok".into(),
        work_hours: 8.5,
        net_work_hours: 8.0,
    };
    let rec = LedgerRecord::worked(&day);
    let cells: Vec<String> = encode(&rec).iter().map(str::to_string).collect();

    assert_eq!(cells.len(), 9);
    assert_eq!(cells.len(), rec.width());
    assert_eq!(
        cells,
        vec![
            "Wednesday",
            "15.01.2025",
            "ok",
            "8,50",
            "8,00",
            "15.01.2025 08:00:00",
            "15.01.2025 16:30:00",
            "15.01.2025 10:00:00",
            "15.01.2025 10:30:00",
        ]
    );
    assert_eq!(rec.kind(), RecordKind::Worked);
}

#[test]
fn test_free_day_has_seven_cells_and_no_timestamps() {
    let rec = LedgerRecord::free_day(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), "Vacation");
    let enc = encode(&rec);
    assert_eq!(enc.len(), 7);
    assert_eq!(&enc[5], "");
    assert_eq!(&enc[6], "");
    assert_eq!(rec.kind(), RecordKind::FreeDay);
}

#[test]
fn test_decode_worked_row_with_two_breaks() {
    let r = row(&[
        "Monday",
        "13.01.2025",
        "",
        "9,00",
        "8,00",
        "13.01.2025 08:00:00",
        "13.01.2025 17:00:00",
        "13.01.2025 10:00:00",
        "13.01.2025 10:15:00",
        "13.01.2025 12:00:00",
        "13.01.2025 12:45:00",
    ]);
    let rec = decode(&r, 2).unwrap();

    assert_eq!(rec.breaks.len(), 2);
    assert_eq!(rec.breaks[1].start, dt("13.01.2025 12:00:00"));
    assert_eq!(rec.net_work_hours, 8.0);
    assert_eq!(rec.kind(), RecordKind::Worked);
    let reencoded: Vec<String> = encode(&rec).iter().map(str::to_string).collect();
    let original: Vec<String> = r.iter().map(str::to_string).collect();
    assert_eq!(reencoded, original);
}

#[test]
fn test_decode_legacy_free_day_with_empty_break_cells() {
    let r = row(&["Friday", "03.01.2025", "Vacation", "0.00", "0.00", "", "", "", ""]);
    let rec = decode(&r, 5).unwrap();

    assert!(rec.breaks.is_empty());
    assert_eq!(rec.kind(), RecordKind::FreeDay);
    assert_eq!(rec.comment, "Vacation");
}

#[test]
fn test_decode_overtime_row() {
    let r = row(&["Wednesday", "15.01.2025", "Overtime taken", "0.00", "-8,00", "", ""]);
    let rec = decode(&r, 3).unwrap();
    assert_eq!(rec.kind(), RecordKind::OvertimeTaken);
    assert_eq!(rec.net_work_hours, -8.0);
}

#[test]
fn test_decode_reports_line_of_malformed_row() {
    let bad_date = row(&["Monday", "2025-01-13", "", "0,00", "0,00", "", ""]);
    match decode(&bad_date, 7) {
        Err(AppError::MalformedRecord { line, reason }) => {
            assert_eq!(line, 7);
            assert!(reason.contains("date"));
        }
        other => panic!("unexpected: {other:?}"),
    }

    let odd = row(&[
        "Monday",
        "13.01.2025",
        "",
        "1,00",
        "1,00",
        "13.01.2025 08:00:00",
        "13.01.2025 09:00:00",
        "13.01.2025 08:30:00",
    ]);
    assert!(matches!(decode(&odd, 3), Err(AppError::MalformedRecord { .. })));

    let short = row(&["Monday", "13.01.2025"]);
    assert!(decode(&short, 4).is_err());

    let bad_number = row(&["Monday", "13.01.2025", "", "x", "0,00", "", ""]);
    assert!(decode(&bad_number, 4).is_err());
}

#[test]
fn test_header_current_and_legacy_are_recognised() {
    assert!(is_header(&row(&[
        "weekday",
        "date",
        "comment",
        "work hours",
        "net work hours",
        "start day",
        "end day",
    ])));
    assert!(is_header(&row(&[
        "weekday",
        "date",
        "comment",
        "work hours",
        "net work hours",
        "start day",
        "end day",
        "break start",
        "break end",
    ])));
    assert!(!is_header(&row(&["date", "comment", "work hours"])));
}
