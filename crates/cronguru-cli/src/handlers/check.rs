use anyhow::{Result, bail};
use chrono::{DateTime, Local};
use cronguru_engine::{EditorError, split_fields, synthesize};
use cronguru_runtime::{Config, build_updater};
use serde::Serialize;

use crate::types::OutputFormat;

#[derive(Debug, Serialize)]
struct CheckReport {
    expression: String,
    valid: bool,
    description: Option<String>,
    next_run: Option<String>,
    error: Option<String>,
}

fn build_report(config: &Config, expression: &str, now: DateTime<Local>) -> CheckReport {
    let fields = split_fields(expression);
    let mut updater = build_updater(config);
    let derived = updater.process(&fields, now);

    // A missing describer still leaves the expression itself usable.
    let valid = !matches!(
        derived.error,
        Some(EditorError::InvalidField(_))
            | Some(EditorError::Description(_))
            | Some(EditorError::ScheduleParse(_))
    );

    CheckReport {
        expression: synthesize(&fields),
        valid,
        description: derived.description.clone(),
        next_run: derived.next_run_display(),
        error: derived.error.as_ref().map(ToString::to_string),
    }
}

pub fn handle(config: &Config, expression: &str, format: OutputFormat) -> Result<()> {
    let report = build_report(config, expression, Local::now());
    tracing::debug!(expression = %report.expression, valid = report.valid, "checked expression");

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Plain => {
            println!("expression:  {}", report.expression);
            if let Some(description) = &report.description {
                println!("description: {}", description);
            }
            if let Some(next_run) = &report.next_run {
                println!("next run:    {}", next_run);
            }
            if report.valid
                && let Some(warning) = &report.error
            {
                eprintln!("Warning: {}", warning);
            }
        }
    }

    if !report.valid {
        bail!("{}", report.error.unwrap_or_default());
    }
    Ok(())
}
