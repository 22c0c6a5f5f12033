use crate::types::{LogLevel, OutputFormat};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cronguru")]
#[command(about = "The quick and simple editor for cron schedule expressions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $CRONGURU_CONFIG or the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Write logs to this file (logging is off unless this or RUST_LOG is set)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive editor (default)
    Edit {
        /// Expression to start with, e.g. "*/15 9-17 * * MON-FRI"
        expression: Option<String>,
    },

    /// Validate and describe an expression without opening the editor
    Check {
        expression: String,

        #[arg(long, default_value = "plain")]
        format: OutputFormat,
    },
}
