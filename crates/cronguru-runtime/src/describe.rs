//! English descriptions of cron expressions ("At 04:20 on Monday").
//!
//! Only structure is checked here. Numeric bounds are the schedule parser's
//! concern, so `20 4 32 * *` still gets a sentence.

use cronguru_engine::{Describer, FIELD_COUNT, Field, Locale};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// One comma-separated piece of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Atom {
    Any { step: Option<u32> },
    Value { value: u32, step: Option<u32> },
    Range { start: u32, end: u32, step: Option<u32> },
}

struct FieldSpec {
    field: Field,
    atoms: Vec<Atom>,
}

impl FieldSpec {
    fn parse(field: Field, text: &str) -> Result<Self, String> {
        let atoms = text
            .split(',')
            .map(|atom| parse_atom(field, atom))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { field, atoms })
    }

    fn is_wildcard(&self) -> bool {
        self.atoms == [Atom::Any { step: None }]
    }

    fn single_value(&self) -> Option<u32> {
        match self.atoms.as_slice() {
            [Atom::Value { value, step: None }] => Some(*value),
            _ => None,
        }
    }

    fn phrase(&self) -> String {
        let plain: Option<Vec<u32>> = self
            .atoms
            .iter()
            .map(|atom| match atom {
                Atom::Value { value, step: None } => Some(*value),
                _ => None,
            })
            .collect();

        match plain {
            Some(values) => {
                let names: Vec<String> = values.iter().map(|v| value_text(self.field, *v)).collect();
                if is_named(self.field) {
                    join_list(&names)
                } else {
                    format!("{} {}", unit(self.field), join_list(&names))
                }
            }
            None => self
                .atoms
                .iter()
                .map(|atom| atom_phrase(self.field, *atom))
                .collect::<Vec<_>>()
                .join(" and "),
        }
    }
}

fn parse_atom(field: Field, atom: &str) -> Result<Atom, String> {
    if atom.is_empty() {
        return Err(format!("empty value in {} field", field));
    }

    let (base, step) = match atom.split_once('/') {
        Some((base, step)) => (base, Some(parse_step(field, step)?)),
        None => (atom, None),
    };

    if base == "*" {
        return Ok(Atom::Any { step });
    }

    match base.split_once('-') {
        Some((start, end)) => Ok(Atom::Range {
            start: parse_value(field, start)?,
            end: parse_value(field, end)?,
            step,
        }),
        None => Ok(Atom::Value {
            value: parse_value(field, base)?,
            step,
        }),
    }
}

fn parse_step(field: Field, step: &str) -> Result<u32, String> {
    step.parse::<u32>()
        .map_err(|_| format!("invalid step '{}' in {} field", step, field))
}

fn parse_value(field: Field, token: &str) -> Result<u32, String> {
    let invalid = || format!("invalid {} value '{}'", field, token);

    if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
        return token.parse::<u32>().map_err(|_| invalid());
    }

    let upper = token.to_ascii_uppercase();
    let names: &[&str] = match field {
        Field::Month => &MONTH_NAMES,
        Field::Weekday => &WEEKDAY_NAMES,
        Field::Minute | Field::Hour | Field::Day => return Err(invalid()),
    };
    let offset = if field == Field::Month { 1 } else { 0 };

    names
        .iter()
        .position(|name| {
            let name = name.to_ascii_uppercase();
            upper == name || upper == name[..3]
        })
        .map(|i| i as u32 + offset)
        .ok_or_else(invalid)
}

fn unit(field: Field) -> &'static str {
    match field {
        Field::Minute => "minute",
        Field::Hour => "hour",
        Field::Day => "day-of-month",
        Field::Month => "month",
        Field::Weekday => "day-of-week",
    }
}

fn is_named(field: Field) -> bool {
    matches!(field, Field::Month | Field::Weekday)
}

fn max_value(field: Field) -> u32 {
    match field {
        Field::Minute => 59,
        Field::Hour => 23,
        Field::Day => 31,
        Field::Month => 12,
        Field::Weekday => 6,
    }
}

fn value_text(field: Field, value: u32) -> String {
    match field {
        Field::Month if (1..=12).contains(&value) => MONTH_NAMES[value as usize - 1].to_string(),
        Field::Weekday if value <= 7 => WEEKDAY_NAMES[value as usize % 7].to_string(),
        _ => value.to_string(),
    }
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

fn every(field: Field, step: Option<u32>) -> String {
    match step {
        Some(step) => format!("every {} {}", ordinal(step), unit(field)),
        None => format!("every {}", unit(field)),
    }
}

fn atom_phrase(field: Field, atom: Atom) -> String {
    match atom {
        Atom::Any { step } => every(field, step),
        Atom::Value { value, step: None } => {
            if is_named(field) {
                value_text(field, value)
            } else {
                format!("{} {}", unit(field), value)
            }
        }
        Atom::Value {
            value,
            step: Some(step),
        } => format!(
            "{} from {} through {}",
            every(field, Some(step)),
            value_text(field, value),
            value_text(field, max_value(field))
        ),
        Atom::Range { start, end, step } => format!(
            "{} from {} through {}",
            every(field, step),
            value_text(field, start),
            value_text(field, end)
        ),
    }
}

fn join_list(items: &[String]) -> String {
    match items {
        [] => String::new(),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

/// crontab.guru-style English sentences
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishDescriber;

impl EnglishDescriber {
    pub fn new() -> Self {
        Self
    }

    pub fn sentence(&self, expression: &str) -> Result<String, String> {
        let parts: Vec<&str> = expression.split_whitespace().collect();
        if parts.len() != FIELD_COUNT {
            return Err(format!(
                "expected {} fields (minute hour day month weekday), got {}",
                FIELD_COUNT,
                parts.len()
            ));
        }

        let specs = Field::ALL
            .iter()
            .zip(&parts)
            .map(|(field, text)| FieldSpec::parse(*field, text))
            .collect::<Result<Vec<_>, _>>()?;
        let [minute, hour, day, month, weekday] = specs.as_slice() else {
            return Err(format!("expected {} fields", FIELD_COUNT));
        };

        let mut sentence = match (minute.single_value(), hour.single_value()) {
            (Some(m), Some(h)) => format!("At {:02}:{:02}", h, m),
            _ => {
                let mut time = format!("At {}", minute.phrase());
                if !hour.is_wildcard() {
                    time.push_str(&format!(" past {}", hour.phrase()));
                }
                time
            }
        };

        if !day.is_wildcard() {
            sentence.push_str(&format!(" on {}", day.phrase()));
        }
        if !month.is_wildcard() {
            sentence.push_str(&format!(" in {}", month.phrase()));
        }
        if !weekday.is_wildcard() {
            let joiner = if day.is_wildcard() { " on " } else { " and on " };
            sentence.push_str(joiner);
            sentence.push_str(&weekday.phrase());
        }

        Ok(sentence)
    }
}

impl Describer for EnglishDescriber {
    fn describe(&self, expression: &str, locale: Locale) -> Result<String, String> {
        match locale {
            Locale::En => self.sentence(expression),
        }
    }
}
