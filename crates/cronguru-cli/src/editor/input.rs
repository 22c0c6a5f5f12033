//! Single-line text input for one cron field.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use cronguru_engine::{FieldWidget, MAX_FIELD_LEN, WILDCARD};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInput {
    value: String,
    /// Cursor position in characters
    cursor: usize,
    char_limit: usize,
    placeholder: &'static str,
    focused: bool,
}

impl Default for FieldInput {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldInput {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            char_limit: MAX_FIELD_LEN,
            placeholder: WILDCARD,
            focused: false,
        }
    }

    pub fn with_value(value: &str) -> Self {
        let mut input = Self::new();
        input.set_value(value);
        input
    }

    /// Replace the text, truncated to the char limit; the cursor moves to the end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().take(self.char_limit).collect();
        self.cursor = self.len();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    /// Apply a key to the text. Returns true when the value changed.
    ///
    /// Blurred inputs ignore every key.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.focused {
            return false;
        }

        match key.code {
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                if self.len() >= self.char_limit {
                    return false;
                }
                let at = self.byte_index(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                true
            }
            KeyCode::Delete => {
                if self.cursor >= self.len() {
                    return false;
                }
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.len());
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.len();
                false
            }
            _ => false,
        }
    }
}

impl FieldWidget for FieldInput {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn focused(value: &str) -> FieldInput {
        let mut input = FieldInput::with_value(value);
        input.focus();
        input
    }

    #[test]
    fn test_typing_appends_at_cursor() {
        let mut input = focused("");
        assert!(input.handle_key(key(KeyCode::Char('1'))));
        assert!(input.handle_key(key(KeyCode::Char('5'))));
        assert_eq!(input.value(), "15");
        assert_eq!(input.cursor(), 2);

        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Char('*')));
        input.handle_key(key(KeyCode::Char('/')));
        assert_eq!(input.value(), "*/15");
    }

    #[test]
    fn test_blurred_input_ignores_keys() {
        let mut input = FieldInput::with_value("5");
        assert!(!input.handle_key(key(KeyCode::Char('1'))));
        assert!(!input.handle_key(key(KeyCode::Backspace)));
        assert_eq!(input.value(), "5");
    }

    #[test]
    fn test_char_limit() {
        let mut input = focused("1,2,3,4,5,6,7");
        assert_eq!(input.value(), "1,2,3,4,5,");
        assert!(!input.handle_key(key(KeyCode::Char('9'))));
        assert_eq!(input.value().len(), MAX_FIELD_LEN);
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = focused("123");
        assert!(input.handle_key(key(KeyCode::Backspace)));
        assert_eq!(input.value(), "12");

        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        assert!(!input.handle_key(key(KeyCode::Backspace)));
        assert!(input.handle_key(key(KeyCode::Delete)));
        assert_eq!(input.value(), "2");
        input.handle_key(key(KeyCode::End));
        assert!(!input.handle_key(key(KeyCode::Delete)));
    }

    #[test]
    fn test_control_chords_are_not_text() {
        let mut input = focused("");
        let chord = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert!(!input.handle_key(chord));
        let shifted = KeyEvent::new(KeyCode::Char('J'), KeyModifiers::SHIFT);
        assert!(input.handle_key(shifted));
        assert_eq!(input.value(), "J");
    }
}
