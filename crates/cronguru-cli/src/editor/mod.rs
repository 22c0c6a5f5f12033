pub mod app;
pub mod clipboard;
pub mod input;

pub use app::{Action, AppEvent, EditorApp};
pub use clipboard::{ClipboardError, ClipboardSink, SystemClipboard};
pub use input::FieldInput;
