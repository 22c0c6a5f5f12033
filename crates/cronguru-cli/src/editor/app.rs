//! Editor application state
//!
//! Owns the five field inputs, the focus navigator and the change-gated updater,
//! and maps one event at a time onto them. Side effects that outlive a single
//! event (quitting, the delayed message clear) are returned as [`Action`]s for
//! the renderer to carry out.

use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use cronguru_engine::{
    ChangeGatedUpdater, Derived, FIELD_COUNT, FieldWidget, FocusNavigator, split_fields,
    synthesize,
};

use super::clipboard::{ClipboardError, ClipboardSink};
use super::input::FieldInput;

pub const COPY_SUCCESS_TEXT: &str = "Copied!";
pub const COPY_FAILED_TEXT: &str = "Failed to copy";
pub const COPY_UNAVAILABLE_TEXT: &str = "Clipboard not available";

/// Events fed into the editor, all on one thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Sent by the delayed timer started after a copy
    ClearMessage,
}

/// What the event loop should do after an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Quit,
    /// Send [`AppEvent::ClearMessage`] back after the delay
    ScheduleClearMessage(Duration),
}

pub struct EditorApp {
    inputs: [FieldInput; FIELD_COUNT],
    navigator: FocusNavigator,
    updater: ChangeGatedUpdater,
    clipboard: Box<dyn ClipboardSink>,
    message_timeout: Duration,
    status_message: Option<String>,
}

impl EditorApp {
    pub fn new(
        initial_expression: &str,
        updater: ChangeGatedUpdater,
        clipboard: Box<dyn ClipboardSink>,
        message_timeout: Duration,
        now: DateTime<Local>,
    ) -> Self {
        let mut inputs = split_fields(initial_expression).map(|value| FieldInput::with_value(&value));
        inputs[0].focus();

        let mut app = Self {
            inputs,
            navigator: FocusNavigator::new(),
            updater,
            clipboard,
            message_timeout,
            status_message: None,
        };
        app.refresh(now);
        app
    }

    pub fn inputs(&self) -> &[FieldInput; FIELD_COUNT] {
        &self.inputs
    }

    pub fn navigator(&self) -> &FocusNavigator {
        &self.navigator
    }

    /// Direct access to the navigator, bypassing key handling.
    ///
    /// Whatever index is left here is checked by the clamp at the start of the
    /// next [`EditorApp::handle_event`].
    pub fn navigator_mut(&mut self) -> &mut FocusNavigator {
        &mut self.navigator
    }

    pub fn derived(&self) -> &Derived {
        self.updater.derived()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn values(&self) -> [&str; FIELD_COUNT] {
        std::array::from_fn(|i| self.inputs[i].value())
    }

    /// Canonical expression for the current field values
    pub fn expression(&self) -> String {
        synthesize(&self.values())
    }

    pub fn handle_event(&mut self, event: AppEvent, now: DateTime<Local>) -> Action {
        self.navigator.restore(&mut self.inputs);

        match event {
            AppEvent::ClearMessage => {
                self.status_message = None;
                Action::None
            }
            AppEvent::Key(key) => self.handle_key(key, now),
        }
    }

    fn handle_key(&mut self, key: KeyEvent, now: DateTime<Local>) -> Action {
        if key.kind != KeyEventKind::Press {
            return Action::None;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Action::Quit,
            KeyCode::Esc => return Action::Quit,
            KeyCode::Char('y') if !ctrl => return self.copy_expression(),
            KeyCode::Char('?') => {
                self.navigator.toggle_help();
                return Action::None;
            }
            KeyCode::Tab | KeyCode::Enter | KeyCode::Char(' ') => {
                self.navigator.advance(&mut self.inputs);
                return Action::None;
            }
            KeyCode::BackTab => {
                self.navigator.retreat(&mut self.inputs);
                return Action::None;
            }
            KeyCode::Backspace if self.navigator.retreat_if_empty(&mut self.inputs) => {
                return Action::None;
            }
            _ => {}
        }

        if self.inputs[self.navigator.index()].handle_key(key) {
            self.updater.invalidate();
        }
        self.refresh(now);
        Action::None
    }

    fn refresh(&mut self, now: DateTime<Local>) {
        let values = self.values().map(str::to_string);
        self.updater.process(&values, now);
    }

    fn copy_expression(&mut self) -> Action {
        let expression = self.expression();
        let message = match self.clipboard.copy(&expression) {
            Ok(()) => COPY_SUCCESS_TEXT,
            Err(ClipboardError::Unavailable) => COPY_UNAVAILABLE_TEXT,
            Err(ClipboardError::Failed(_)) => COPY_FAILED_TEXT,
        };
        tracing::info!(%expression, message, "copy requested");
        self.status_message = Some(message.to_string());
        Action::ScheduleClearMessage(self.message_timeout)
    }
}
