use chrono::{DateTime, Local, TimeZone};
use cronguru_engine::{
    ChangeGatedUpdater, Describer, EditorError, FIELD_COUNT, Field, FieldWidget, FocusNavigator,
    Locale, Schedule, ScheduleParser,
};

struct Widget {
    value: String,
    focused: bool,
}

impl FieldWidget for Widget {
    fn value(&self) -> &str {
        &self.value
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }
}

struct Never;

impl Schedule for Never {
    fn next_after(&self, _instant: &DateTime<Local>) -> Option<DateTime<Local>> {
        None
    }
}

struct AcceptAll;

impl ScheduleParser for AcceptAll {
    fn parse(&self, _expression: &str) -> Result<Box<dyn Schedule>, String> {
        Ok(Box::new(Never))
    }
}

struct Echo;

impl Describer for Echo {
    fn describe(&self, expression: &str, _locale: Locale) -> Result<String, String> {
        Ok(expression.to_string())
    }
}

fn values(widgets: &[Widget; FIELD_COUNT]) -> [String; FIELD_COUNT] {
    std::array::from_fn(|i| widgets[i].value.clone())
}

#[test]
fn test_typing_through_fields_updates_expression() {
    let now = Local.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
    let mut widgets: [Widget; FIELD_COUNT] = std::array::from_fn(|i| Widget {
        value: String::new(),
        focused: i == 0,
    });
    let mut nav = FocusNavigator::new();
    let mut updater = ChangeGatedUpdater::new(Box::new(AcceptAll), Box::new(Echo), Locale::En);

    let typed = ["0", "9", "", "JAN", "mon"];
    for (i, text) in typed.iter().enumerate() {
        nav.restore(&mut widgets);
        assert_eq!(nav.index(), i);
        widgets[nav.index()].value = text.to_string();
        updater.invalidate();
        updater.process(&values(&widgets), now);
        nav.advance(&mut widgets);
    }

    let derived = updater.derived();
    assert_eq!(derived.description.as_deref(), Some("0 9 * JAN mon"));
    assert_eq!(derived.error, None);
    assert_eq!(nav.index(), 0);
}

#[test]
fn test_backspace_walks_back_over_empty_fields() {
    let mut widgets: [Widget; FIELD_COUNT] = std::array::from_fn(|i| Widget {
        value: if i == 1 { "5".to_string() } else { String::new() },
        focused: i == 0,
    });
    let mut nav = FocusNavigator::new();
    nav.retreat(&mut widgets);
    assert_eq!(nav.index(), 4);

    let mut moves = 0;
    while nav.retreat_if_empty(&mut widgets) {
        moves += 1;
    }
    assert_eq!(moves, 3);
    assert_eq!(nav.index(), 1);
    assert!(widgets[1].is_focused());
    assert_eq!(widgets.iter().filter(|w| w.is_focused()).count(), 1);
}

#[test]
fn test_invalid_weekday_is_named() {
    let now = Local.with_ymd_and_hms(2025, 6, 1, 8, 0, 0).unwrap();
    let mut updater = ChangeGatedUpdater::new(Box::new(AcceptAll), Box::new(Echo), Locale::En);
    let derived = updater.process(&["0", "0", "*", "*", "XYZ"], now);
    assert_eq!(derived.error, Some(EditorError::InvalidField(Field::Weekday)));
    assert_eq!(
        derived.error.as_ref().map(ToString::to_string).as_deref(),
        Some("invalid value in field: weekday")
    );
}
