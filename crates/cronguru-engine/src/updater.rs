//! Change-Gated Updater
//!
//! Runs synthesis and validation on every cycle, and asks the description and
//! schedule collaborators for derived output only when the expression changed
//! and every field passed validation.

use chrono::{DateTime, Local};

use crate::collaborators::{Describer, Locale, ScheduleParser};
use crate::error::{EditorError, Result};
use crate::expression::synthesize;
use crate::field::{FIELD_COUNT, Field};
use crate::validator::is_valid;

/// Display format for the next occurrence
pub const NEXT_RUN_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Outputs derived from the current field values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Derived {
    pub description: Option<String>,
    pub next_run: Option<DateTime<Local>>,
    pub error: Option<EditorError>,
}

impl Derived {
    pub fn next_run_display(&self) -> Option<String> {
        self.next_run
            .map(|next| next.format(NEXT_RUN_FORMAT).to_string())
    }

    fn invalid(error: EditorError) -> Self {
        Self {
            description: None,
            next_run: None,
            error: Some(error),
        }
    }
}

/// Check every field in order and report the first one that fails.
pub fn validate_fields<S: AsRef<str>>(values: &[S; FIELD_COUNT]) -> Result<()> {
    for (value, field) in values.iter().zip(Field::ALL) {
        if !is_valid(value.as_ref(), field) {
            return Err(EditorError::InvalidField(field));
        }
    }
    Ok(())
}

pub struct ChangeGatedUpdater {
    parser: Box<dyn ScheduleParser>,
    describer: Option<Box<dyn Describer>>,
    locale: Locale,
    /// Most recently processed canonical expression
    last_seen: Option<String>,
    /// Describer construction failure, surfaced on the first cycle only
    init_error: Option<EditorError>,
    derived: Derived,
}

impl ChangeGatedUpdater {
    pub fn new(
        parser: Box<dyn ScheduleParser>,
        describer: Box<dyn Describer>,
        locale: Locale,
    ) -> Self {
        Self {
            parser,
            describer: Some(describer),
            locale,
            last_seen: None,
            init_error: None,
            derived: Derived::default(),
        }
    }

    /// Updater whose describer could not be constructed.
    ///
    /// Editing and next-run computation keep working; descriptions are never produced.
    pub fn degraded(parser: Box<dyn ScheduleParser>, init_error: impl Into<String>) -> Self {
        Self {
            parser,
            describer: None,
            locale: Locale::default(),
            last_seen: None,
            init_error: Some(EditorError::DescriberInit(init_error.into())),
            derived: Derived::default(),
        }
    }

    pub fn derived(&self) -> &Derived {
        &self.derived
    }

    pub fn last_seen(&self) -> Option<&str> {
        self.last_seen.as_deref()
    }

    pub fn is_degraded(&self) -> bool {
        self.describer.is_none()
    }

    /// Forget the last-seen expression so the next cycle recomputes.
    pub fn invalidate(&mut self) {
        self.last_seen = None;
    }

    /// Run one processing cycle against the current field values.
    pub fn process<S: AsRef<str>>(
        &mut self,
        values: &[S; FIELD_COUNT],
        now: DateTime<Local>,
    ) -> &Derived {
        let expression = synthesize(values);

        if self.last_seen.as_deref() == Some(expression.as_str()) {
            tracing::trace!(%expression, "expression unchanged, skipping update");
            return &self.derived;
        }
        self.last_seen = Some(expression.clone());

        self.run_cycle(values, &expression, now);

        if let Some(init_error) = self.init_error.take()
            && self.derived.error.is_none()
        {
            self.derived.error = Some(init_error);
        }

        &self.derived
    }

    fn run_cycle<S: AsRef<str>>(
        &mut self,
        values: &[S; FIELD_COUNT],
        expression: &str,
        now: DateTime<Local>,
    ) {
        if expression.trim().is_empty() {
            self.derived = Derived::default();
            return;
        }

        if let Err(err) = validate_fields(values) {
            tracing::debug!(%expression, error = %err, "field validation failed");
            self.derived = Derived::invalid(err);
            return;
        }

        self.derived.error = None;
        self.update_description(expression);
        self.update_next_run(expression, now);

        tracing::debug!(
            %expression,
            description = ?self.derived.description,
            next_run = ?self.derived.next_run_display(),
            error = ?self.derived.error,
            "expression processed"
        );
    }

    fn update_description(&mut self, expression: &str) {
        let Some(describer) = &self.describer else {
            self.derived.description = None;
            return;
        };

        match describer.describe(expression, self.locale) {
            Ok(description) => {
                self.derived.description = Some(description);
                self.derived.error = None;
            }
            Err(msg) => {
                self.derived.description = None;
                self.derived.next_run = None;
                self.derived.error = Some(EditorError::Description(msg));
            }
        }
    }

    fn update_next_run(&mut self, expression: &str, now: DateTime<Local>) {
        match self.parser.parse(expression) {
            Ok(schedule) => {
                self.derived.next_run = schedule.next_after(&now);
            }
            Err(msg) => {
                self.derived.next_run = None;
                self.derived.error = Some(EditorError::ScheduleParse(msg));
            }
        }
    }
}
