mod common;
use common::{data_lines, files_for, read, setup_ledger};
use std::fs;
use worktime::core::sorter::{SortLogic, SortOutcome};
use worktime::errors::AppError;

const HEADER: &str = "weekday;date;comment;work hours;net work hours;start day;end day\n";

fn write_ledger(path: &str, rows: &[&str]) {
    let mut content = HEADER.to_string();
    for r in rows {
        content.push_str(r);
        content.push('\n');
    }
    fs::write(path, content).expect("write ledger");
}

#[test]
fn test_sort_orders_rows_by_date() {
    let ledger = setup_ledger("sort_orders");
    let (_cfg, files) = files_for(&ledger);
    write_ledger(
        &ledger,
        &[
            "Friday;03.01.2025;c;0,00;0,00;;",
            "Wednesday;01.01.2025;a;0,00;0,00;;",
            "Tuesday;31.12.2024;z;0,00;0,00;;",
            "Thursday;02.01.2025;b;0,00;0,00;;",
        ],
    );

    assert_eq!(SortLogic::sort_by_date(&files).unwrap(), SortOutcome::Sorted(4));

    let comments: Vec<String> = files
        .store
        .read_all()
        .unwrap()
        .into_iter()
        .map(|r| r.comment)
        .collect();
    assert_eq!(comments, vec!["z", "a", "b", "c"]);
}

#[test]
fn test_sort_keeps_same_day_rows_in_order() {
    let ledger = setup_ledger("sort_stable");
    let (_cfg, files) = files_for(&ledger);
    write_ledger(
        &ledger,
        &[
            "Wednesday;15.01.2025;first;8,50;8,00;15.01.2025 08:00:00;15.01.2025 16:30:00",
            "Tuesday;14.01.2025;earlier;0,00;0,00;;",
            "Wednesday;15.01.2025;Overtime taken;0,00;-2,00;;",
            "Wednesday;15.01.2025;third;0,00;0,00;;",
        ],
    );

    SortLogic::sort_by_date(&files).unwrap();

    let lines = data_lines(&ledger);
    assert!(lines[0].contains("earlier"));
    assert!(lines[1].contains("first"));
    assert!(lines[2].contains("Overtime taken"));
    assert!(lines[3].contains("third"));
}

#[test]
fn test_sort_is_idempotent() {
    let ledger = setup_ledger("sort_idempotent");
    let (_cfg, files) = files_for(&ledger);
    write_ledger(
        &ledger,
        &[
            "Thursday;16.01.2025;x;9,00;8,25;16.01.2025 08:00:00;16.01.2025 17:00:00;16.01.2025 12:00:00;16.01.2025 12:45:00",
            "Wednesday;01.01.2025;Vacation;0.00;0.00;;;;",
            "Wednesday;15.01.2025;Overtime taken;0.00;-8,00;;;;",
        ],
    );

    SortLogic::sort_by_date(&files).unwrap();
    let first = read(&ledger);

    assert_eq!(
        SortLogic::sort_by_date(&files).unwrap(),
        SortOutcome::AlreadySorted(3)
    );
    let second = read(&ledger);

    assert_eq!(first, second);
}

#[test]
fn test_sort_fails_on_bad_date_and_leaves_file_untouched() {
    let ledger = setup_ledger("sort_bad_date");
    let (_cfg, files) = files_for(&ledger);
    write_ledger(
        &ledger,
        &[
            "Friday;03.01.2025;c;0,00;0,00;;",
            "Someday;not a date;?;0,00;0,00;;",
            "Wednesday;01.01.2025;a;0,00;0,00;;",
        ],
    );
    let before = read(&ledger);

    let err = SortLogic::sort_by_date(&files).unwrap_err();
    assert!(matches!(err, AppError::MalformedRecord { line: 3, .. }));
    assert_eq!(read(&ledger), before);
}

#[test]
fn test_sort_on_empty_ledger_is_a_no_op() {
    let ledger = setup_ledger("sort_empty");
    let (_cfg, files) = files_for(&ledger);

    assert_eq!(SortLogic::sort_by_date(&files).unwrap(), SortOutcome::Empty);
    assert!(!files.store.exists());

    fs::write(&ledger, HEADER).unwrap();
    assert_eq!(SortLogic::sort_by_date(&files).unwrap(), SortOutcome::Empty);
    assert_eq!(read(&ledger), HEADER);
}

#[test]
fn test_sort_accepts_legacy_header() {
    let ledger = setup_ledger("sort_legacy_header");
    let (_cfg, files) = files_for(&ledger);
    fs::write(
        &ledger,
        "weekday;date;comment;work hours;net work hours;start day;end day;break start;break end\n\
         Friday;03.01.2025;c;0.00;0.00;;;;\n\
         Wednesday;01.01.2025;a;0.00;0.00;;;;\n",
    )
    .unwrap();

    SortLogic::sort_by_date(&files).unwrap();

    assert_eq!(
        read(&ledger),
        format!(
            "{}Wednesday;01.01.2025;a;0,00;0,00;;\nFriday;03.01.2025;c;0,00;0,00;;\n",
            HEADER
        )
    );
}
