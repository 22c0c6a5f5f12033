//! Token Validator
//!
//! Syntactic pre-filter applied to every field on every edit. It catches stray
//! letters and malformed wildcard steps; numeric bounds (day 32, hour 25) are left
//! to the schedule parser.
//!
//! Structure beyond the wildcard prefix is intentionally shallow: values such as
//! `1--5` or `,,` pass here and are rejected later by the parser.

use crate::field::{Field, WILDCARD};

/// Shortest letter run accepted as a month/weekday name
const MIN_ABBREV_LEN: usize = 3;

/// Characters every field accepts
const SYMBOLS: &[char] = &['*', ',', '-', '/'];

/// Decide whether `value` is syntactically acceptable for `field`.
pub fn is_valid(value: &str, field: Field) -> bool {
    if value.is_empty() || value == WILDCARD {
        return true;
    }

    let upper = value.to_ascii_uppercase();

    if !upper.chars().all(|c| is_allowed_char(c, field)) {
        return false;
    }

    if upper.chars().any(|c| c.is_ascii_alphabetic()) {
        return is_valid_letter_value(&upper, field);
    }

    is_valid_step_prefix(&upper)
}

fn is_allowed_char(c: char, field: Field) -> bool {
    c.is_ascii_digit() || SYMBOLS.contains(&c) || (field.accepts_letters() && c.is_ascii_uppercase())
}

/// Leading run of letters, starting at position 0
fn leading_letters(upper: &str) -> &str {
    let end = upper
        .find(|c: char| !c.is_ascii_uppercase())
        .unwrap_or(upper.len());
    &upper[..end]
}

fn is_valid_letter_value(upper: &str, field: Field) -> bool {
    if !field.accepts_letters() {
        return false;
    }

    let letters = leading_letters(upper);
    if letters.len() < MIN_ABBREV_LEN {
        return false;
    }

    field
        .abbreviations()
        .iter()
        .any(|abbrev| letters.starts_with(abbrev) || letters.contains(abbrev))
}

/// `*` may only be followed by `/` and at least one digit (`*/5`).
fn is_valid_step_prefix(value: &str) -> bool {
    let Some(rest) = value.strip_prefix('*') else {
        return true;
    };
    if rest.is_empty() {
        return true;
    }

    let Some(step) = rest.strip_prefix('/') else {
        return false;
    };

    !step.is_empty() && step.chars().all(|c| c.is_ascii_digit())
}
