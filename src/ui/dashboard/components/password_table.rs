//! Password log view
//!
//! Title, add hint and the entries table. Passwords are masked per row.

use crate::logs::PasswordLog;
use crate::theme::Palette;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

const COLUMNS: [&str; 6] = ["NAME", "EMAIL", "PASSWORD", "LINK", "DESCRIPTION", "TYPE"];

pub fn render_password_log(
    f: &mut Frame,
    area: Rect,
    passwords: &PasswordLog,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Fill(1),
        ])
        .split(area);

    super::render_view_heading(
        f,
        chunks[0],
        chunks[1],
        &passwords.title(),
        passwords.add_label(),
        palette,
    );

    let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c))).style(
        Style::default()
            .fg(palette.muted)
            .bg(palette.table_header)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = passwords
        .log
        .entries()
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.name.as_str()),
                Cell::from(entry.email.as_str()),
                Cell::from(passwords.display_password(entry)),
                Cell::from(Span::styled(
                    entry.link.as_str(),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::UNDERLINED),
                )),
                Cell::from(entry.description.as_str()),
                Cell::from(entry.kind.to_string()),
            ])
            .style(Style::default().fg(palette.row_text))
        })
        .collect();

    let empty = rows.is_empty();
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(16),
            Constraint::Percentage(20),
            Constraint::Percentage(12),
            Constraint::Percentage(22),
            Constraint::Percentage(20),
            Constraint::Percentage(10),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(palette.muted))
            .style(Style::default().bg(palette.surface)),
    )
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("> ");

    let mut table_state = TableState::default();
    if !empty {
        table_state.select(Some(passwords.log.selected()));
    }
    f.render_stateful_widget(table, chunks[2], &mut table_state);

    if empty {
        let hint = Paragraph::new(Line::from(Span::styled(
            "No entries yet. Press [a] to add one.",
            Style::default().fg(palette.muted),
        )));
        f.render_widget(hint, chunks[2].inner(Margin::new(2, 2)));
    }
}
