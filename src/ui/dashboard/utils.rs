//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Origin;
use crate::router::View;
use crate::theme::Palette;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::Color;

/// Get a ratatui color for an activity event based on where it came from
pub fn get_origin_color(origin: &Origin, palette: &Palette) -> Color {
    match origin {
        Origin::Session => Color::Green,
        Origin::Router => palette.muted,
        Origin::Theme => Color::Yellow,
        Origin::Log(View::Personal) => palette.accent,
        Origin::Log(View::Business) => Color::Cyan,
        Origin::Log(View::Links) => Color::Magenta,
    }
}

/// Format compact timestamp (time of day) from a full "YYYY-MM-DD HH:MM:SS" timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    match timestamp.split(' ').nth(1) {
        Some(time_part) if time_part.len() >= 8 => time_part[..8].to_string(),
        // Fallback to original timestamp if parsing fails
        _ => timestamp.to_string(),
    }
}

/// A rectangle of the given percentage size, centered in `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Hides a secret behind one bullet per character.
pub fn mask(secret: &str) -> String {
    "•".repeat(secret.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_timestamp_keeps_time_of_day() {
        assert_eq!(format_compact_timestamp("2026-10-19 08:15:42"), "08:15:42");
        assert_eq!(format_compact_timestamp("garbled"), "garbled");
    }

    #[test]
    fn centered_rect_is_inside_parent() {
        let parent = Rect::new(0, 0, 100, 50);
        let popup = centered_rect(60, 50, parent);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.height, 25);
        assert_eq!(popup.x, 20);
    }

    #[test]
    fn mask_hides_every_character() {
        assert_eq!(mask("abc"), "•••");
        assert_eq!(mask(""), "");
    }
}
