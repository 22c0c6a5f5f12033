/// How a field box should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Normal,
    Focused,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldViewModel {
    pub label: &'static str,
    pub value: String,
    pub placeholder: &'static str,
    pub cursor: usize,
    pub focused: bool,
    pub status: FieldStatus,
}

/// Everything one frame of the editor shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorViewModel {
    pub description: Option<String>,
    pub error: Option<String>,
    pub next_run: Option<String>,
    pub fields: Vec<FieldViewModel>,
    pub allowed_values: String,
    pub help_lines: Option<Vec<&'static str>>,
    pub status_message: Option<String>,
}
