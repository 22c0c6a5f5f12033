//! Clipboard sink backed by the platform's copy tools
//! (pbcopy, wl-copy, xclip, xsel, clip).

use std::fmt;
use std::io::{self, Write};
use std::process::{Command, Stdio};

use is_terminal::IsTerminal;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardError {
    /// No clipboard in this environment (no display, not a terminal)
    Unavailable,

    /// Every copy tool failed
    Failed(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable => write!(f, "clipboard not available"),
            ClipboardError::Failed(msg) => write!(f, "failed to copy: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    /// Copying needs a terminal and, on Linux, a graphical session.
    pub fn is_available() -> bool {
        if !io::stdout().is_terminal() {
            return false;
        }
        if cfg!(target_os = "linux")
            && std::env::var_os("DISPLAY").is_none()
            && std::env::var_os("WAYLAND_DISPLAY").is_none()
        {
            return false;
        }
        true
    }

    fn candidates() -> Vec<(&'static str, &'static [&'static str])> {
        const NO_ARGS: &[&str] = &[];
        const XCLIP_ARGS: &[&str] = &["-selection", "clipboard"];
        const XSEL_ARGS: &[&str] = &["--clipboard", "--input"];

        if cfg!(target_os = "macos") {
            return vec![("pbcopy", NO_ARGS)];
        }
        if cfg!(target_os = "windows") {
            return vec![("clip", NO_ARGS)];
        }

        let mut tools = Vec::new();
        if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            tools.push(("wl-copy", NO_ARGS));
        }
        tools.push(("xclip", XCLIP_ARGS));
        tools.push(("xsel", XSEL_ARGS));
        tools
    }

    fn copy_with(program: &str, args: &[&str], text: &str) -> io::Result<()> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()?;

        // stdin is dropped at the end of the match so the tool sees EOF
        let written = match child.stdin.take() {
            Some(mut stdin) => stdin.write_all(text.as_bytes()),
            None => Ok(()),
        };

        // Always reap the child, even when it stopped reading early
        let status = child.wait()?;
        written?;
        if status.success() {
            Ok(())
        } else {
            Err(io::Error::other(format!("{} exited with {}", program, status)))
        }
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ClipboardError> {
        if !Self::is_available() {
            return Err(ClipboardError::Unavailable);
        }

        let mut failures = Vec::new();
        for (program, args) in Self::candidates() {
            match Self::copy_with(program, args, text) {
                Ok(()) => {
                    tracing::debug!(program, "copied expression to clipboard");
                    return Ok(());
                }
                Err(err) => failures.push(format!("{}: {}", program, err)),
            }
        }

        tracing::warn!(?failures, "clipboard copy failed");
        Err(ClipboardError::Failed(failures.join("; ")))
    }
}
