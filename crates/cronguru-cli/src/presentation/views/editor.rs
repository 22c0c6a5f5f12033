//! Editor screen
//!
//! Title, description or error, next run, the five field boxes with their
//! labels, the allowed-values hint, optional help and the footer.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::presentation::view_models::{EditorViewModel, FieldStatus, FieldViewModel};

/// Width of one field column (box and label)
const COLUMN_WIDTH: u16 = 12;

const TITLE: &str = "crontab guru";
const SUBTITLE: &str = "The quick and simple editor for cron schedule expressions";
const FOOTER: &str = "Press ? for help, y to copy, Esc to quit";

pub struct EditorView<'a> {
    model: &'a EditorViewModel,
}

impl<'a> EditorView<'a> {
    pub fn new(model: &'a EditorViewModel) -> Self {
        Self { model }
    }
}

fn centered<'l>(line: impl Into<Line<'l>>) -> Paragraph<'l> {
    Paragraph::new(line.into()).alignment(Alignment::Center)
}

fn columns(area: Rect) -> Vec<Rect> {
    Layout::horizontal([Constraint::Length(COLUMN_WIDTH); 5])
        .flex(Flex::Center)
        .split(area)
        .to_vec()
}

fn border_color(status: FieldStatus) -> Color {
    match status {
        FieldStatus::Normal => Color::Reset,
        FieldStatus::Focused => Color::Yellow,
        FieldStatus::Error => Color::Red,
    }
}

fn field_line(field: &FieldViewModel) -> Line<'static> {
    let placeholder_style = Style::default().fg(Color::DarkGray);

    if !field.focused {
        return if field.value.is_empty() {
            Line::from(Span::styled(field.placeholder, placeholder_style))
        } else {
            Line::from(field.value.clone())
        };
    }

    let cursor_style = Style::default().add_modifier(Modifier::REVERSED);
    if field.value.is_empty() {
        return Line::from(Span::styled(
            field.placeholder,
            placeholder_style.add_modifier(Modifier::REVERSED),
        ));
    }

    let chars: Vec<char> = field.value.chars().collect();
    let cursor = field.cursor.min(chars.len());
    let before: String = chars[..cursor].iter().collect();
    let under: String = chars.get(cursor).map(|c| c.to_string()).unwrap_or(" ".to_string());
    let after: String = chars.get(cursor + 1..).unwrap_or_default().iter().collect();

    Line::from(vec![
        Span::raw(before),
        Span::styled(under, cursor_style),
        Span::raw(after),
    ])
}

impl<'a> Widget for EditorView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let model = self.model;
        let help_height = model.help_lines.as_ref().map_or(0, |lines| lines.len() as u16 + 1);

        let rows = Layout::vertical([
            Constraint::Length(1),           // top margin
            Constraint::Length(1),           // title
            Constraint::Length(1),           // subtitle
            Constraint::Length(1),           // spacer
            Constraint::Length(1),           // description
            Constraint::Length(1),           // error
            Constraint::Length(1),           // next run
            Constraint::Length(1),           // spacer
            Constraint::Length(3),           // field boxes
            Constraint::Length(1),           // labels
            Constraint::Length(1),           // allowed values
            Constraint::Length(1),           // spacer
            Constraint::Length(help_height), // help
            Constraint::Length(1),           // footer
            Constraint::Length(1),           // status message
            Constraint::Min(0),
        ])
        .split(area);

        centered(Span::styled(
            TITLE,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .render(rows[1], buf);
        centered(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))).render(rows[2], buf);

        if let Some(description) = &model.description {
            centered(Span::styled(
                format!("\"{}\"", description),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::ITALIC),
            ))
            .render(rows[4], buf);
        }

        if let Some(error) = &model.error {
            centered(Span::styled(
                format!("Error: {}", error),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
            .render(rows[5], buf);
        }

        if let Some(next_run) = &model.next_run {
            centered(Span::styled(
                format!("next at {}", next_run),
                Style::default().fg(Color::Cyan),
            ))
            .render(rows[6], buf);
        }

        for (field, rect) in model.fields.iter().zip(columns(rows[8])) {
            Paragraph::new(field_line(field))
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .border_style(Style::default().fg(border_color(field.status))),
                )
                .alignment(Alignment::Center)
                .render(rect, buf);
        }

        for (field, rect) in model.fields.iter().zip(columns(rows[9])) {
            let style = if field.focused {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            centered(Span::styled(field.label, style)).render(rect, buf);
        }

        centered(Span::styled(
            model.allowed_values.as_str(),
            Style::default().fg(Color::DarkGray),
        ))
        .render(rows[10], buf);

        if let Some(lines) = &model.help_lines {
            let help: Vec<Line> = lines
                .iter()
                .map(|line| Line::from(Span::styled(*line, Style::default().fg(Color::Gray))))
                .collect();
            Paragraph::new(help)
                .alignment(Alignment::Center)
                .render(rows[12], buf);
        }

        centered(Span::styled(FOOTER, Style::default().fg(Color::DarkGray))).render(rows[13], buf);

        if let Some(message) = &model.status_message {
            centered(Span::styled(message.as_str(), Style::default().fg(Color::Green)))
                .render(rows[14], buf);
        }
    }
}
