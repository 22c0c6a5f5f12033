use cronguru_engine::{EditorError, Field, FieldWidget};

use crate::editor::EditorApp;
use crate::presentation::view_models::{EditorViewModel, FieldStatus, FieldViewModel};

const HELP_LINES: [&str; 9] = [
    "*    any value",
    ",    value list separator",
    "-    range of values",
    "/    step values",
    "---------------------------",
    "tab/space/enter: next field",
    "shift+tab: previous field",
    "y: copy expression",
    "esc/ctrl+c: quit",
];

fn field_status(field: Field, focused: bool, error: Option<&EditorError>) -> FieldStatus {
    match error {
        Some(EditorError::InvalidField(bad)) if *bad == field => FieldStatus::Error,
        Some(EditorError::InvalidField(_)) | None | Some(EditorError::DescriberInit(_)) => {
            if focused {
                FieldStatus::Focused
            } else {
                FieldStatus::Normal
            }
        }
        Some(EditorError::Description(_)) | Some(EditorError::ScheduleParse(_)) => {
            FieldStatus::Error
        }
    }
}

/// Build the frame for the current editor state
pub fn build_editor_view_model(app: &EditorApp) -> EditorViewModel {
    let derived = app.derived();
    let error = derived.error.as_ref();

    let fields: Vec<FieldViewModel> = Field::ALL
        .iter()
        .zip(app.inputs().iter())
        .map(|(field, input)| FieldViewModel {
            label: field.name(),
            value: input.value().to_string(),
            placeholder: input.placeholder(),
            cursor: input.cursor(),
            focused: input.is_focused(),
            status: field_status(*field, input.is_focused(), error),
        })
        .collect();

    let focus_index = app.navigator().index();
    let allowed_values = Field::from_index(focus_index)
        .map(|field| format!("Allowed values: {}", field.allowed_values()))
        .unwrap_or_default();

    EditorViewModel {
        description: derived.description.clone(),
        error: error.map(ToString::to_string),
        next_run: derived.next_run_display(),
        fields,
        allowed_values,
        help_lines: app.navigator().show_help().then(|| HELP_LINES.to_vec()),
        status_message: app.status_message().map(str::to_string),
    }
}
