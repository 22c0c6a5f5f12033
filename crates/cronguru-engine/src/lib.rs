// Engine module - field validation, expression synthesis and editor state
// This layer sits between the input widgets (CLI) and the schedule/description
// collaborators (runtime); it never parses schedules itself.

pub mod collaborators;
pub mod error;
pub mod expression;
pub mod field;
pub mod focus;
pub mod updater;
pub mod validator;

pub use collaborators::{Describer, FieldWidget, Locale, Schedule, ScheduleParser};
pub use error::{EditorError, Result};
pub use expression::{split_fields, synthesize};
pub use field::{FIELD_COUNT, Field, MAX_FIELD_LEN, WILDCARD};
pub use focus::FocusNavigator;
pub use updater::{ChangeGatedUpdater, Derived, NEXT_RUN_FORMAT, validate_fields};
pub use validator::is_valid;
