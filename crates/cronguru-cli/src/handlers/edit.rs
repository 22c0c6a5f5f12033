use std::io;

use anyhow::Result;
use chrono::Local;
use cronguru_runtime::{Config, build_updater};
use is_terminal::IsTerminal;

use crate::editor::{EditorApp, SystemClipboard};
use crate::presentation::renderers::TuiRenderer;

pub fn handle(config: &Config, expression: Option<&str>) -> Result<()> {
    if !io::stdout().is_terminal() || !io::stdin().is_terminal() {
        tracing::info!("not attached to a terminal, editor not started");
        eprintln!("cronguru: the editor needs an interactive terminal (try `cronguru check`)");
        return Ok(());
    }

    let initial = expression.unwrap_or(&config.initial_expression);
    tracing::info!(initial, locale = %config.locale, "starting editor");

    let app = EditorApp::new(
        initial,
        build_updater(config),
        Box::new(SystemClipboard::new()),
        config.message_timeout(),
        Local::now(),
    );

    TuiRenderer::new(app).run()
}
