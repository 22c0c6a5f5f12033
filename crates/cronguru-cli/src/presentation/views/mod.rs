mod editor;

pub use editor::EditorView;
