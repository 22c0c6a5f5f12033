use chrono::{DateTime, Datelike, Local, TimeZone, Timelike};
use cronguru_engine::{EditorError, Field, synthesize};
use cronguru_runtime::{Config, build_updater};

fn now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2025, 6, 4, 12, 0, 0).unwrap()
}

#[test]
fn test_default_expression_is_described_and_scheduled() {
    let mut updater = build_updater(&Config::default());
    let fields = ["20", "4", "*", "*", "*"];
    assert_eq!(synthesize(&fields), "20 4 * * *");

    let derived = updater.process(&fields, now());
    assert_eq!(derived.error, None);
    assert_eq!(derived.description.as_deref(), Some("At 04:20"));

    let next = derived.next_run.unwrap();
    assert_eq!((next.day(), next.hour(), next.minute()), (5, 4, 20));
}

#[test]
fn test_day_out_of_range_is_rejected_by_parser() {
    let mut updater = build_updater(&Config::default());
    let derived = updater.process(&["20", "4", "32", "*", "*"], now());

    assert!(matches!(derived.error, Some(EditorError::ScheduleParse(_))));
    assert_eq!(derived.next_run, None);
    assert_eq!(
        derived.description.as_deref(),
        Some("At 04:20 on day-of-month 32")
    );
}

#[test]
fn test_short_month_letters_rejected_before_collaborators() {
    let mut updater = build_updater(&Config::default());
    updater.process(&["20", "4", "*", "*", "*"], now());
    let derived = updater.process(&["20", "4", "*", "S", "*"], now());

    assert_eq!(derived.error, Some(EditorError::InvalidField(Field::Month)));
    assert!(derived.error.as_ref().unwrap().to_string().contains("month"));
    assert_eq!(derived.description, None);
    assert_eq!(derived.next_run, None);
}

#[test]
fn test_empty_fields_mean_every_minute() {
    let mut updater = build_updater(&Config::default());
    let derived = updater.process(&["", "", "", "", ""], now()).clone();

    assert_eq!(updater.last_seen(), Some("* * * * *"));
    assert_eq!(derived.description.as_deref(), Some("At every minute"));
    assert_eq!(derived.next_run, Some(now() + chrono::Duration::minutes(1)));
}

#[test]
fn test_shallow_syntax_caught_by_collaborators() {
    let mut updater = build_updater(&Config::default());
    let derived = updater.process(&["1--5", "*", "*", "*", "*"], now());

    assert!(matches!(derived.error, Some(EditorError::ScheduleParse(_))));
    assert_eq!(derived.description, None);
    assert_eq!(derived.next_run, None);
}

#[test]
fn test_unsupported_locale_degrades() {
    let config = Config {
        locale: "xx".to_string(),
        ..Config::default()
    };
    let mut updater = build_updater(&config);
    assert!(updater.is_degraded());

    let derived = updater.process(&["0", "9", "*", "*", "MON-FRI"], now()).clone();
    assert_eq!(
        derived.error,
        Some(EditorError::DescriberInit("unsupported locale 'xx'".to_string()))
    );
    assert_eq!(derived.description, None);
    assert!(derived.next_run.is_some());
}

#[test]
fn test_restricted_day_fields_match_either() {
    let mut updater = build_updater(&Config::default());
    let derived = updater.process(&["0", "9", "1", "*", "MON"], now());

    assert_eq!(derived.error, None);
    assert_eq!(
        derived.description.as_deref(),
        Some("At 09:00 on day-of-month 1 and on Monday")
    );
    assert_eq!(
        derived.next_run_display().as_deref(),
        Some("2025-06-09 09:00:00")
    );
}
