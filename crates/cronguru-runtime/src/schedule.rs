//! Schedule parser backed by the `cron` crate.

use std::str::FromStr;

use chrono::{DateTime, Local};
use cronguru_engine::{FIELD_COUNT, Schedule, ScheduleParser};

/// Weekday names in classic cron order (0 = Sunday)
const WEEKDAY_NAMES: [&str; 7] = ["SUN", "MON", "TUE", "WED", "THU", "FRI", "SAT"];

/// Split an expression by the classic day-matching rule.
///
/// When both day-of-month and day-of-week are restricted (neither starts with
/// `*`) a day matches if either field matches. The `cron` crate requires both, so
/// the expression becomes two schedules, one per day field, with the other field
/// set to `*`.
pub(crate) fn day_variants(expression: &str) -> Result<Vec<String>, String> {
    let fields: Vec<&str> = expression.split_whitespace().collect();
    if fields.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} fields (minute hour day month weekday), got {}",
            FIELD_COUNT,
            fields.len()
        ));
    }

    let [minute, hour, day, month, weekday] = fields.as_slice() else {
        return Ok(vec![expression.to_string()]);
    };
    if day.starts_with('*') || weekday.starts_with('*') {
        return Ok(vec![fields.join(" ")]);
    }

    Ok(vec![
        format!("{} {} {} {} *", minute, hour, day, month),
        format!("{} {} * {} {}", minute, hour, month, weekday),
    ])
}

/// Normalize a 5-field expression to the `cron` crate's 6-field form.
///
/// A `0` seconds field is prepended. The `cron` crate numbers weekdays 1-7 from
/// Sunday, so numeric weekdays are rewritten as names to keep the classic
/// 0-7 meaning. Numbers outside 0-7 are passed through for the parser to reject.
pub(crate) fn normalize_expression(expression: &str) -> Result<String, String> {
    let fields: Vec<&str> = expression.split_whitespace().collect();
    if fields.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} fields (minute hour day month weekday), got {}",
            FIELD_COUNT,
            fields.len()
        ));
    }

    Ok(format!(
        "0 {} {} {} {} {}",
        fields[0],
        fields[1],
        fields[2],
        fields[3],
        normalize_weekday(fields[4])
    ))
}

fn normalize_weekday(field: &str) -> String {
    field
        .split(',')
        .map(normalize_weekday_atom)
        .collect::<Vec<_>>()
        .join(",")
}

fn normalize_weekday_atom(atom: &str) -> String {
    let (range, step) = match atom.split_once('/') {
        Some((range, step)) => (range, Some(step)),
        None => (atom, None),
    };

    // Ranges ending in 7 (Sunday) would run backwards once 7 becomes SUN
    if let Some((start, "7")) = range.split_once('-')
        && let Ok(start) = start.parse::<usize>()
    {
        match step.map(str::parse::<usize>) {
            None if start == 0 => return "SUN-SAT".to_string(),
            None if start <= 6 => return format!("{}-SAT,SUN", WEEKDAY_NAMES[start]),
            Some(Ok(step @ 1..)) if start <= 7 => return expand_weekdays(start, step),
            _ => {}
        }
    }

    let range = range
        .split('-')
        .map(weekday_name)
        .collect::<Vec<_>>()
        .join("-");

    match step {
        Some(step) => format!("{}/{}", range, step),
        None => range,
    }
}

/// Explicit day list for a stepped range running up to 7 ("1-7/2" is MON,WED,FRI,SUN)
fn expand_weekdays(start: usize, step: usize) -> String {
    let mut names: Vec<&str> = Vec::new();
    for day in (start..=7).step_by(step) {
        let name = WEEKDAY_NAMES[day % 7];
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names.join(",")
}

fn weekday_name(token: &str) -> &str {
    match token.parse::<usize>() {
        Ok(day @ 0..=7) => WEEKDAY_NAMES[day % 7],
        _ => token,
    }
}

/// A schedule parsed by the `cron` crate.
///
/// Holds two schedules when the day fields are matched either-or; the next run
/// is the earlier of their occurrences.
pub struct CronSchedule {
    schedules: Vec<cron::Schedule>,
}

impl Schedule for CronSchedule {
    fn next_after(&self, instant: &DateTime<Local>) -> Option<DateTime<Local>> {
        self.schedules
            .iter()
            .filter_map(|schedule| schedule.after(instant).next())
            .min()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CronScheduleParser;

impl CronScheduleParser {
    pub fn new() -> Self {
        Self
    }
}

impl ScheduleParser for CronScheduleParser {
    fn parse(&self, expression: &str) -> Result<Box<dyn Schedule>, String> {
        let schedules = day_variants(expression)?
            .iter()
            .map(|variant| {
                let normalized = normalize_expression(variant)?;
                cron::Schedule::from_str(&normalized).map_err(|e| e.to_string())
            })
            .collect::<Result<Vec<_>, _>>()?;

        if schedules.len() > 1 {
            tracing::trace!(%expression, "day-of-month and day-of-week matched either-or");
        }
        Ok(Box::new(CronSchedule { schedules }))
    }
}
