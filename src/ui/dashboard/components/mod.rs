//! Dashboard component modules
//!
//! Contains all individual rendering components

pub mod footer;
pub mod header;
pub mod links_table;
pub mod logs;
pub mod modal;
pub mod password_table;
pub mod sidebar;

use crate::theme::Palette;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

/// Title line and the "add" hint above a log's table.
fn render_view_heading(
    f: &mut Frame,
    title_area: Rect,
    add_area: Rect,
    title: &str,
    add_label: &str,
    palette: &Palette,
) {
    let title = Paragraph::new(title.to_string()).style(
        Style::default()
            .fg(palette.text)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, title_area);

    let add = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" [a] + {add_label} "),
            Style::default()
                .fg(palette.surface)
                .bg(palette.accent)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    f.render_widget(add, add_area);
}
