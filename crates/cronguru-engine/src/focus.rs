//! Focus Navigator
//!
//! Tracks which of the five field widgets is being edited and whether the
//! help panel is open. Every transition blurs the previously focused widget and
//! focuses the new one, so at most one widget holds focus at a time.

use crate::collaborators::FieldWidget;
use crate::field::FIELD_COUNT;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FocusNavigator {
    index: usize,
    show_help: bool,
}

impl FocusNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Set the index from input the navigator does not control.
    ///
    /// Not bounds checked and no widget focus changes: an out-of-range index is
    /// left for [`FocusNavigator::restore`] to repair on the next cycle.
    pub fn set_index(&mut self, index: usize) {
        self.index = index;
    }

    /// Restore the index invariant. Run at the start of every processing cycle.
    ///
    /// An out-of-range index is reset to 0 and the first widget is refocused.
    /// Returns true when a repair happened.
    pub fn restore<W: FieldWidget>(&mut self, widgets: &mut [W; FIELD_COUNT]) -> bool {
        if self.index < FIELD_COUNT {
            return false;
        }

        tracing::warn!(index = self.index, "focus index out of range, resetting");
        for widget in widgets.iter_mut() {
            widget.blur();
        }
        self.index = 0;
        widgets[0].focus();
        true
    }

    /// Move to the next field, wrapping from the last to the first.
    pub fn advance<W: FieldWidget>(&mut self, widgets: &mut [W; FIELD_COUNT]) {
        self.move_to((self.index + 1) % FIELD_COUNT, widgets);
    }

    /// Move to the previous field, wrapping from the first to the last.
    pub fn retreat<W: FieldWidget>(&mut self, widgets: &mut [W; FIELD_COUNT]) {
        self.move_to((self.index + FIELD_COUNT - 1) % FIELD_COUNT, widgets);
    }

    /// Step back one field when the active field is empty.
    ///
    /// Never wraps: a no-op on the first field or when the active field has text.
    /// Returns true when focus moved.
    pub fn retreat_if_empty<W: FieldWidget>(&mut self, widgets: &mut [W; FIELD_COUNT]) -> bool {
        if self.index == 0 || !widgets[self.index].value().is_empty() {
            return false;
        }
        self.move_to(self.index - 1, widgets);
        true
    }

    fn move_to<W: FieldWidget>(&mut self, next: usize, widgets: &mut [W; FIELD_COUNT]) {
        widgets[self.index].blur();
        tracing::debug!(from = self.index, to = next, "focus moved");
        self.index = next;
        widgets[self.index].focus();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct StubWidget {
        value: String,
        focused: bool,
    }

    impl FieldWidget for StubWidget {
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

    fn widgets(values: [&str; FIELD_COUNT]) -> [StubWidget; FIELD_COUNT] {
        let mut widgets = values.map(|v| StubWidget {
            value: v.to_string(),
            focused: false,
        });
        widgets[0].focus();
        widgets
    }

    fn focused_indices(widgets: &[StubWidget; FIELD_COUNT]) -> Vec<usize> {
        widgets
            .iter()
            .enumerate()
            .filter(|(_, w)| w.is_focused())
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_advance_wraps_to_first() {
        let mut nav = FocusNavigator::new();
        let mut ws = widgets(["1", "2", "3", "4", "5"]);
        for expected in [1, 2, 3, 4, 0] {
            nav.advance(&mut ws);
            assert_eq!(nav.index(), expected);
            assert_eq!(focused_indices(&ws), vec![expected]);
        }
    }

    #[test]
    fn test_retreat_wraps_to_last() {
        let mut nav = FocusNavigator::new();
        let mut ws = widgets(["1", "2", "3", "4", "5"]);
        nav.retreat(&mut ws);
        assert_eq!(nav.index(), 4);
        assert_eq!(focused_indices(&ws), vec![4]);
    }

    #[test]
    fn test_retreat_if_empty_noop_at_first_field() {
        let mut nav = FocusNavigator::new();
        let mut ws = widgets(["", "", "", "", ""]);
        assert!(!nav.retreat_if_empty(&mut ws));
        assert_eq!(nav.index(), 0);
        assert_eq!(focused_indices(&ws), vec![0]);
    }

    #[test]
    fn test_retreat_if_empty_noop_on_non_empty_field() {
        let mut nav = FocusNavigator::new();
        let mut ws = widgets(["1", "", "3", "", ""]);
        nav.advance(&mut ws);
        nav.advance(&mut ws);
        assert!(!nav.retreat_if_empty(&mut ws));
        assert_eq!(nav.index(), 2);
    }

    #[test]
    fn test_retreat_if_empty_steps_back() {
        let mut nav = FocusNavigator::new();
        let mut ws = widgets(["1", "", "", "", ""]);
        nav.advance(&mut ws);
        nav.advance(&mut ws);
        assert!(nav.retreat_if_empty(&mut ws));
        assert_eq!(nav.index(), 1);
        assert!(nav.retreat_if_empty(&mut ws));
        assert_eq!(nav.index(), 0);
        assert_eq!(focused_indices(&ws), vec![0]);
    }

    #[test]
    fn test_restore_clamps_out_of_range_index() {
        let mut nav = FocusNavigator::new();
        let mut ws = widgets(["1", "2", "3", "4", "5"]);
        nav.advance(&mut ws);
        nav.set_index(7);

        assert!(nav.restore(&mut ws));
        assert_eq!(nav.index(), 0);
        assert_eq!(focused_indices(&ws), vec![0]);
        assert!(!nav.restore(&mut ws));
    }

    #[test]
    fn test_toggle_help() {
        let mut nav = FocusNavigator::new();
        assert!(!nav.show_help());
        nav.toggle_help();
        assert!(nav.show_help());
        nav.toggle_help();
        assert!(!nav.show_help());
    }
}
