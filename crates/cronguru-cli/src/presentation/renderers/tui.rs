use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use crossterm::{
    cursor,
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::editor::{Action, AppEvent, EditorApp};
use crate::presentation::presenters::build_editor_view_model;
use crate::presentation::views::EditorView;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

type CrosstermTerminal = Terminal<CrosstermBackend<io::Stdout>>;

/// Raw mode and the alternate screen, left again when dropped.
///
/// Dropping also runs on early `?` returns and while unwinding from a panic.
struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self {
            restore: restore_terminal,
        };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = (self.restore)() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, cursor::Show)
}

/// Runs the editor in the alternate screen until the user quits.
///
/// Key presses and timer messages both reach the app on this thread; timers
/// only post [`AppEvent::ClearMessage`] through the channel.
pub struct TuiRenderer {
    app: EditorApp,
    tx: Sender<AppEvent>,
    rx: Receiver<AppEvent>,
}

impl TuiRenderer {
    pub fn new(app: EditorApp) -> Self {
        let (tx, rx) = mpsc::channel();
        Self { app, tx, rx }
    }

    pub fn run(mut self) -> Result<()> {
        let guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);
        drop(guard);

        tracing::info!(expression = %self.app.expression(), "editor closed");
        result
    }

    fn event_loop(&mut self, terminal: &mut CrosstermTerminal) -> Result<()> {
        loop {
            let model = build_editor_view_model(&self.app);
            terminal.draw(|f| f.render_widget(EditorView::new(&model), f.area()))?;

            if event::poll(POLL_INTERVAL)?
                && let Event::Key(key) = event::read()?
                && self.dispatch(AppEvent::Key(key)) == Action::Quit
            {
                return Ok(());
            }

            while let Ok(app_event) = self.rx.try_recv() {
                if self.dispatch(app_event) == Action::Quit {
                    return Ok(());
                }
            }
        }
    }

    fn dispatch(&mut self, app_event: AppEvent) -> Action {
        let action = self.app.handle_event(app_event, Local::now());
        if let Action::ScheduleClearMessage(delay) = action {
            let tx = self.tx.clone();
            thread::spawn(move || {
                thread::sleep(delay);
                // The receiver is gone once the editor has quit.
                let _ = tx.send(AppEvent::ClearMessage);
            });
        }
        action
    }
}
