//! Dashboard activity panel component
//!
//! Renders activity logs with event formatting

use super::super::state::DashboardState;
use super::super::utils::{format_compact_timestamp, get_origin_color};
use crate::events::EventType;
use crate::theme::Palette;
use ratatui::Frame;
use ratatui::prelude::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

/// Render the activity panel, newest events first.
pub fn render_logs_panel(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    state: &DashboardState,
    palette: &Palette,
) {
    // Account for borders and padding
    let max_logs = (area.height.saturating_sub(2)) as usize;
    let log_count = max_logs.max(1);

    let log_lines: Vec<Line> = state
        .visible_events()
        .take(log_count)
        .map(|event| {
            let status_icon = match event.event_type {
                EventType::Created => "+",
                EventType::Updated => "~",
                EventType::Deleted => "-",
                EventType::Warning => "!",
                EventType::Navigated | EventType::Toggled | EventType::Session => "·",
            };

            Line::from(vec![
                Span::raw(format!("{status_icon} ")),
                Span::styled(
                    format!("{} ", format_compact_timestamp(&event.timestamp)),
                    Style::default().fg(palette.muted),
                ),
                Span::styled(
                    event.msg.clone(),
                    Style::default().fg(get_origin_color(&event.origin, palette)),
                ),
            ])
        })
        .collect();

    let log_paragraph = if log_lines.is_empty() {
        Paragraph::new(vec![Line::from("No activity yet")])
    } else {
        Paragraph::new(log_lines)
    };

    let logs_block = Block::default()
        .title("ACTIVITY LOG")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.accent))
        .style(Style::default().bg(palette.surface).fg(palette.text))
        .padding(Padding::horizontal(1));

    let log_widget = log_paragraph.block(logs_block).wrap(Wrap { trim: true });

    f.render_widget(log_widget, area);
}
