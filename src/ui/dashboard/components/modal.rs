//! Add/edit modal
//!
//! Draws an [`EntryEditor`] as a centered popup over the current view.

use super::super::utils::{centered_rect, mask};
use crate::editor::{EntryEditor, FormEntry, InputKind};
use crate::theme::Palette;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

/// Height of one bordered input.
const FIELD_HEIGHT: u16 = 3;
/// Text areas show three lines.
const TEXT_AREA_HEIGHT: u16 = 5;

fn field_height(input: InputKind) -> u16 {
    match input {
        InputKind::TextArea => TEXT_AREA_HEIGHT,
        _ => FIELD_HEIGHT,
    }
}

/// Text shown inside an input; passwords are masked like a password input.
fn shown_value(input: InputKind, raw: &str) -> String {
    match input {
        InputKind::Password => mask(raw),
        InputKind::Select => format!("◂ {raw} ▸"),
        _ => raw.to_string(),
    }
}

pub fn render_editor<E: FormEntry>(
    f: &mut Frame,
    area: Rect,
    editor: &EntryEditor<E>,
    title: &str,
    palette: &Palette,
) {
    let fields = editor.fields();
    let wanted = fields.iter().map(|f| field_height(f.input)).sum::<u16>() + 4;
    let popup = centered_rect(70, 90, area);
    let popup = Rect {
        height: popup.height.min(wanted),
        ..popup
    };

    f.render_widget(Clear, popup);
    let block = Block::default()
        .title(title.to_string())
        .title_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.surface).fg(palette.text));
    f.render_widget(block, popup);

    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|f| Constraint::Length(field_height(f.input)))
        .collect();
    constraints.push(Constraint::Length(1));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(popup.inner(Margin::new(2, 1)));

    for (index, field) in fields.iter().enumerate() {
        let focused = index == editor.focus();
        let border = if focused {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.muted)
        };
        let label = if field.required {
            format!("{} *", field.label)
        } else {
            field.label.to_string()
        };
        let mut value = shown_value(field.input, editor.buffer(index));
        if focused && field.input != InputKind::Select {
            value.push('▏');
        }
        let input = Paragraph::new(value).block(
            Block::default()
                .title(label)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(border),
        );
        f.render_widget(input, chunks[index]);
    }

    if let Some(violation) = editor.violation() {
        let message =
            Paragraph::new(violation.to_string()).style(Style::default().fg(palette.danger));
        f.render_widget(message, chunks[fields.len()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_render_like_their_html_types() {
        assert_eq!(shown_value(InputKind::Password, "abc"), "•••");
        assert_eq!(shown_value(InputKind::Select, "Paid"), "◂ Paid ▸");
        assert_eq!(shown_value(InputKind::Tags, "a, b"), "a, b");
    }

    #[test]
    fn text_areas_get_three_lines() {
        assert_eq!(field_height(InputKind::TextArea) - 2, 3);
        assert_eq!(field_height(InputKind::Email), FIELD_HEIGHT);
    }
}
