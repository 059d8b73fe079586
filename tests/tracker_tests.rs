mod common;
use common::dt;
use worktime::core::tracker::{DayState, DayTracker};
use worktime::errors::AppError;

#[test]
fn test_new_tracker_is_not_started() {
    let tracker = DayTracker::new();
    assert_eq!(tracker.state(), DayState::NotStarted);
    assert!(tracker.current().is_none());
}

#[test]
fn test_break_cycle_changes_state() {
    let mut t = DayTracker::new();
    t.start_day(dt("15.01.2025 08:00:00"));
    assert_eq!(t.state(), DayState::Working);

    t.start_break(dt("15.01.2025 10:00:00")).unwrap();
    assert_eq!(t.state(), DayState::OnBreak);

    let b = t.end_break(dt("15.01.2025 10:30:00")).unwrap();
    assert_eq!(b.hours(), 0.5);
    assert_eq!(t.state(), DayState::Working);
}

#[test]
fn test_end_break_without_break_changes_nothing() {
    let mut t = DayTracker::new();
    t.start_day(dt("15.01.2025 08:00:00"));
    let before = t.current().cloned();

    let err = t.end_break(dt("15.01.2025 09:00:00")).unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));
    assert_eq!(t.state(), DayState::Working);
    assert_eq!(t.current().cloned(), before);
    assert!(t.current().unwrap().breaks.is_empty());
}

#[test]
fn test_end_break_before_start_day_is_rejected() {
    let mut t = DayTracker::new();
    assert!(matches!(
        t.end_break(dt("15.01.2025 09:00:00")),
        Err(AppError::InvalidTransition(_))
    ));
    assert_eq!(t.state(), DayState::NotStarted);
}

#[test]
fn test_start_break_requires_working_state() {
    let mut t = DayTracker::new();
    assert!(t.start_break(dt("15.01.2025 09:00:00")).is_err());
    assert_eq!(t.state(), DayState::NotStarted);

    t.start_day(dt("15.01.2025 08:00:00"));
    t.start_break(dt("15.01.2025 09:00:00")).unwrap();

    // second start while on break
    assert!(matches!(
        t.start_break(dt("15.01.2025 09:10:00")),
        Err(AppError::InvalidTransition(_))
    ));
    assert_eq!(t.current().unwrap().breaks.len(), 1);
}

#[test]
fn test_only_last_break_can_be_open() {
    let mut t = DayTracker::new();
    t.start_day(dt("15.01.2025 08:00:00"));
    t.start_break(dt("15.01.2025 09:00:00")).unwrap();
    t.end_break(dt("15.01.2025 09:15:00")).unwrap();
    t.start_break(dt("15.01.2025 12:00:00")).unwrap();

    let day = t.current().unwrap();
    let open: Vec<usize> = day
        .breaks
        .iter()
        .enumerate()
        .filter(|(_, b)| b.is_open())
        .map(|(i, _)| i)
        .collect();
    assert_eq!(open, vec![1]);
}

#[test]
fn test_net_hours_are_gross_minus_breaks() {
    let mut t = DayTracker::new();
    t.start_day(dt("15.01.2025 08:00:00"));
    t.start_break(dt("15.01.2025 10:00:00")).unwrap();
    t.end_break(dt("15.01.2025 10:15:00")).unwrap();
    t.start_break(dt("15.01.2025 12:00:00")).unwrap();
    t.end_break(dt("15.01.2025 12:45:00")).unwrap();

    let day = t.end_day(dt("15.01.2025 17:00:00"), "", 500).unwrap();

    assert_eq!(day.work_hours, 9.0);
    assert_eq!(day.breaks.len(), 2);
    assert_eq!(day.net_work_hours, day.work_hours - day.break_hours());
    assert_eq!(day.net_work_hours, 8.0);
    assert_eq!(t.state(), DayState::NotStarted);
}

#[test]
fn test_end_day_while_on_break_is_rejected() {
    let mut t = DayTracker::new();
    t.start_day(dt("15.01.2025 08:00:00"));
    t.start_break(dt("15.01.2025 12:00:00")).unwrap();

    let err = t.end_day(dt("15.01.2025 17:00:00"), "", 500).unwrap_err();
    assert!(matches!(err, AppError::InvalidTransition(_)));
    assert_eq!(t.state(), DayState::OnBreak);

    t.end_break(dt("15.01.2025 12:30:00")).unwrap();
    let day = t.end_day(dt("15.01.2025 17:00:00"), "", 500).unwrap();
    assert_eq!(day.net_work_hours, 8.5);
}

#[test]
fn test_end_day_without_start_is_rejected() {
    let mut t = DayTracker::new();
    assert!(matches!(
        t.end_day(dt("15.01.2025 17:00:00"), "late", 500),
        Err(AppError::InvalidTransition(_))
    ));
}

#[test]
fn test_start_day_discards_previous_day() {
    let mut t = DayTracker::new();
    assert!(t.start_day(dt("14.01.2025 08:00:00")).is_none());
    t.start_break(dt("14.01.2025 09:00:00")).unwrap();

    let discarded = t.start_day(dt("15.01.2025 08:00:00")).unwrap();
    assert_eq!(discarded.breaks.len(), 1);

    let day = t.current().unwrap();
    assert_eq!(day.start_day, dt("15.01.2025 08:00:00"));
    assert!(day.breaks.is_empty());
    assert!(day.comment.is_empty());
    assert_eq!(t.state(), DayState::Working);
}

#[test]
fn test_comment_is_truncated_by_chars() {
    let mut t = DayTracker::new();
    t.start_day(dt("15.01.2025 08:00:00"));

    let long: String = "é".repeat(600);
    let day = t.end_day(dt("15.01.2025 16:00:00"), &long, 500).unwrap();
    assert_eq!(day.comment.chars().count(), 500);
}

#[test]
fn test_end_day_before_start_is_rejected() {
    let mut t = DayTracker::new();
    t.start_day(dt("15.01.2025 08:00:00"));
    assert!(t.end_day(dt("15.01.2025 07:00:00"), "", 500).is_err());
    assert_eq!(t.state(), DayState::Working);
}

#[test]
fn test_finish_keeps_the_day_until_discarded() {
    let mut t = DayTracker::new();
    t.start_day(dt("15.01.2025 08:00:00"));

    let first = t.finish(dt("15.01.2025 16:00:00"), "draft", 500).unwrap();
    assert_eq!(first.work_hours, 8.0);
    assert_eq!(t.state(), DayState::Working);

    let second = t.finish(dt("15.01.2025 16:30:00"), "final", 500).unwrap();
    assert_eq!(second.work_hours, 8.5);
    assert_eq!(second.comment, "final");

    assert!(t.discard().is_some());
    assert_eq!(t.state(), DayState::NotStarted);
}
