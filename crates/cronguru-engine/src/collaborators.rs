//! Contracts for the services the editor core delegates to.
//!
//! The engine never parses schedules, writes descriptions or draws widgets itself;
//! concrete implementations live in `cronguru-runtime` and `cronguru` (the CLI).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local};

/// A parsed schedule
pub trait Schedule {
    /// First occurrence strictly after `instant`
    fn next_after(&self, instant: &DateTime<Local>) -> Option<DateTime<Local>>;
}

/// Turns a canonical expression into a [`Schedule`].
///
/// Must reject semantically out-of-range values even when the token validator
/// accepted them.
pub trait ScheduleParser {
    fn parse(&self, expression: &str) -> std::result::Result<Box<dyn Schedule>, String>;
}

/// Turns a canonical expression into a natural-language sentence
pub trait Describer {
    fn describe(&self, expression: &str, locale: Locale) -> std::result::Result<String, String>;
}

/// Text-input widget owning one field's value
pub trait FieldWidget {
    fn value(&self) -> &str;
    fn is_focused(&self) -> bool;
    fn focus(&mut self);
    fn blur(&mut self);
}

/// Languages descriptions can be produced in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "en_us" | "en-us" | "en_gb" | "en-gb" => Ok(Locale::En),
            other => Err(format!("unsupported locale '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_parsing() {
        assert_eq!("en".parse::<Locale>(), Ok(Locale::En));
        assert_eq!("EN-us".parse::<Locale>(), Ok(Locale::En));
        assert_eq!(
            "de".parse::<Locale>(),
            Err("unsupported locale 'de'".to_string())
        );
    }
}
