pub mod config;
pub mod describe;
pub mod error;
pub mod schedule;

pub use config::{Config, DEFAULT_INITIAL_EXPRESSION, resolve_config_path};
pub use describe::EnglishDescriber;
pub use error::{Error, Result};
pub use schedule::{CronSchedule, CronScheduleParser};

use cronguru_engine::{ChangeGatedUpdater, Locale};

/// Wire the concrete collaborators into an updater.
///
/// An unsupported locale leaves the updater degraded: it still validates and
/// computes next runs, and reports the describer failure once.
pub fn build_updater(config: &Config) -> ChangeGatedUpdater {
    let parser = Box::new(CronScheduleParser::new());

    match config.locale.parse::<Locale>() {
        Ok(locale) => ChangeGatedUpdater::new(parser, Box::new(EnglishDescriber::new()), locale),
        Err(msg) => {
            tracing::warn!(locale = %config.locale, error = %msg, "description generator unavailable");
            ChangeGatedUpdater::degraded(parser, msg)
        }
    }
}
