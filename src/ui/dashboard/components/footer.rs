//! Dashboard footer component
//!
//! Renders the key bindings for whatever currently has focus

use crate::router::View;
use crate::theme::Palette;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Key hints for the current view, or for the modal when it is open.
pub fn footer_text(view: Option<View>, modal_open: bool) -> &'static str {
    match (view, modal_open) {
        (_, true) => {
            "[Tab] Next field | [←/→] Change type | [Alt+Enter] New line | [Enter] Save | [Esc] Cancel"
        }
        (Some(View::Links), false) => {
            "[a] Add | [e] Edit | [d] Delete | [1-3] Switch log | [s] Sidebar | [t] Theme | [q] Quit"
        }
        (Some(_), false) => {
            "[a] Add | [e] Edit | [d] Delete | [v] Show password | [1-3] Switch log | [s] Sidebar | [t] Theme | [q] Quit"
        }
        (None, false) => "[1-3] Open a log | [s] Sidebar | [t] Theme | [q] Quit",
    }
}

/// Render footer with key hints.
pub fn render_footer(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    view: Option<View>,
    modal_open: bool,
    palette: &Palette,
) {
    let footer = Paragraph::new(footer_text(view, modal_open))
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(palette.muted)),
        );
    f.render_widget(footer, area);
}
