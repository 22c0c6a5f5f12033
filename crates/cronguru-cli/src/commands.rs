use super::args::{Cli, Commands};
use super::handlers;
use super::logging;
use anyhow::Result;
use cronguru_runtime::Config;

pub fn run(cli: Cli) -> Result<()> {
    logging::init(cli.log_level, cli.log_file.as_deref())?;

    let config = Config::load(cli.config.as_deref())?;

    match cli.command {
        None => handlers::edit::handle(&config, None),
        Some(Commands::Edit { expression }) => handlers::edit::handle(&config, expression.as_deref()),
        Some(Commands::Check { expression, format }) => {
            handlers::check::handle(&config, &expression, format)
        }
    }
}
