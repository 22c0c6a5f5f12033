mod args;
mod commands;
pub mod editor;
mod handlers;
mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
