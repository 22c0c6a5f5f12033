use std::fmt;

/// Number of fields in a classic cron expression
pub const FIELD_COUNT: usize = 5;

/// Maximum number of characters a single field accepts
pub const MAX_FIELD_LEN: usize = 10;

/// Token standing in for an empty field
pub const WILDCARD: &str = "*";

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

const WEEKDAY_ABBREVIATIONS: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// One of the five ordinal positions of a cron expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Minute,
    Hour,
    Day,
    Month,
    Weekday,
}

impl Field {
    /// All fields in expression order
    pub const ALL: [Field; FIELD_COUNT] = [
        Field::Minute,
        Field::Hour,
        Field::Day,
        Field::Month,
        Field::Weekday,
    ];

    pub fn index(self) -> usize {
        match self {
            Field::Minute => 0,
            Field::Hour => 1,
            Field::Day => 2,
            Field::Month => 3,
            Field::Weekday => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Field> {
        Self::ALL.get(index).copied()
    }

    /// Name used in labels and error messages
    pub fn name(self) -> &'static str {
        match self {
            Field::Minute => "minute",
            Field::Hour => "hour",
            Field::Day => "day",
            Field::Month => "month",
            Field::Weekday => "weekday",
        }
    }

    /// Human-readable hint for the values this field takes
    pub fn allowed_values(self) -> &'static str {
        match self {
            Field::Minute => "0-59",
            Field::Hour => "0-23",
            Field::Day => "1-31",
            Field::Month => "1-12 or JAN-DEC",
            Field::Weekday => "0-6 or SUN-SAT (7 is also Sunday)",
        }
    }

    /// Whether alphabetic abbreviations are allowed in this field
    pub fn accepts_letters(self) -> bool {
        matches!(self, Field::Month | Field::Weekday)
    }

    /// Canonical three-letter abbreviations (uppercase); empty for numeric-only fields
    pub fn abbreviations(self) -> &'static [&'static str] {
        match self {
            Field::Month => &MONTH_ABBREVIATIONS,
            Field::Weekday => &WEEKDAY_ABBREVIATIONS,
            Field::Minute | Field::Hour | Field::Day => &[],
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips_in_order() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
            assert_eq!(Field::from_index(i), Some(*field));
        }
        assert_eq!(Field::from_index(FIELD_COUNT), None);
    }

    #[test]
    fn test_only_month_and_weekday_accept_letters() {
        assert!(!Field::Minute.accepts_letters());
        assert!(!Field::Hour.accepts_letters());
        assert!(!Field::Day.accepts_letters());
        assert!(Field::Month.accepts_letters());
        assert!(Field::Weekday.accepts_letters());
        assert!(Field::Day.abbreviations().is_empty());
        assert_eq!(Field::Weekday.abbreviations()[0], "SUN");
    }
}
