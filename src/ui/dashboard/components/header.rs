//! Dashboard header component
//!
//! Renders the app title, the active view and the theme switch

use crate::theme::{Palette, Theme};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Render header with title on the left and the theme indicator on the right.
pub fn render_header(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    view_title: &str,
    theme: Theme,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(palette.muted))
        .style(Style::default().bg(palette.surface));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Fill(1), Constraint::Length(14)])
        .split(inner);

    let version = env!("CARGO_PKG_VERSION");
    let title = Paragraph::new(format!("PASSLOG v{version} | {view_title}")).style(
        Style::default()
            .fg(palette.accent)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, header_chunks[0]);

    let indicator = match theme {
        Theme::Light => "[t] ☀ Light",
        Theme::Dark => "[t] ☾ Dark",
    };
    let theme_switch = Paragraph::new(indicator)
        .alignment(Alignment::Right)
        .style(Style::default().fg(palette.text));
    f.render_widget(theme_switch, header_chunks[1]);
}
