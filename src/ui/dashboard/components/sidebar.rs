//! Dashboard sidebar component
//!
//! Navigation between the three logs

use crate::router::View;
use crate::theme::Palette;

use ratatui::Frame;
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Padding};

pub fn render_sidebar(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    current: Option<View>,
    palette: &Palette,
) {
    let items: Vec<ListItem> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let style = if Some(*view) == current {
                Style::default()
                    .fg(palette.surface)
                    .bg(palette.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(palette.text)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{} ", i + 1), Style::default().fg(palette.muted)),
                Span::styled(view.nav_label(), style),
            ]))
        })
        .collect();

    let block = Block::default()
        .title("NAVIGATION")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.surface))
        .padding(Padding::uniform(1));

    f.render_widget(List::new(items).block(block), area);
}
