use std::fmt;

use crate::field::Field;

/// Result type for cronguru-engine operations
pub type Result<T> = std::result::Result<T, EditorError>;

/// Errors surfaced by an update cycle.
///
/// None of these are fatal; they are shown to the user and cleared by the next
/// successful edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    /// A field failed the token validator (first failing field in order)
    InvalidField(Field),

    /// The description generator rejected the expression
    Description(String),

    /// The schedule parser rejected the expression
    ScheduleParse(String),

    /// The description generator could not be constructed at startup
    DescriberInit(String),
}

impl EditorError {
    /// Field the error points at, if it is a field-level error
    pub fn field(&self) -> Option<Field> {
        match self {
            EditorError::InvalidField(field) => Some(*field),
            EditorError::Description(_)
            | EditorError::ScheduleParse(_)
            | EditorError::DescriberInit(_) => None,
        }
    }
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorError::InvalidField(field) => write!(f, "invalid value in field: {}", field),
            EditorError::Description(msg) => write!(f, "{}", msg),
            EditorError::ScheduleParse(msg) => write!(f, "failed to parse cron expression: {}", msg),
            EditorError::DescriberInit(msg) => write!(f, "failed to create cron descriptor: {}", msg),
        }
    }
}

impl std::error::Error for EditorError {}
