//! Dashboard main renderer

use super::components::{footer, header, links_table, logs, modal, password_table, sidebar};
use super::state::DashboardState;
use crate::router::View;
use crate::theme::{Palette, Theme};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::Style;
use ratatui::widgets::{Block, Paragraph};

/// Renders the dashboard chrome around the view mounted at `view`.
pub fn render_dashboard(
    f: &mut Frame,
    state: &DashboardState,
    view: Option<View>,
    theme: Theme,
    with_background_color: bool,
) {
    let palette = Palette::for_theme(theme);
    if with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(palette.background)),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Fill(1),
            Constraint::Length(8),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    let title = state.title(view);
    header::render_header(f, main_chunks[0], &title, theme, &palette);

    let outlet = if state.sidebar_open {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(28), Constraint::Fill(1)])
            .spacing(1)
            .split(main_chunks[1]);
        sidebar::render_sidebar(f, content_chunks[0], view, &palette);
        content_chunks[1]
    } else {
        main_chunks[1]
    };

    render_outlet(f, outlet, state, view, &palette);
    logs::render_logs_panel(f, main_chunks[2], state, &palette);
    footer::render_footer(
        f,
        main_chunks[3],
        view,
        state.is_modal_open(view),
        &palette,
    );
    render_modal(f, state, view, &palette);
}

/// Mounts the routed view in the outlet.
fn render_outlet(
    f: &mut Frame,
    area: Rect,
    state: &DashboardState,
    view: Option<View>,
    palette: &Palette,
) {
    match view {
        Some(View::Personal) => {
            password_table::render_password_log(f, area, &state.personal, palette)
        }
        Some(View::Business) => {
            password_table::render_password_log(f, area, &state.business, palette)
        }
        Some(View::Links) => links_table::render_links_log(f, area, &state.links, palette),
        None => {
            let placeholder = Paragraph::new("Select a log from the sidebar: [1] [2] [3]")
                .alignment(Alignment::Center)
                .style(Style::default().fg(palette.muted));
            f.render_widget(placeholder, area);
        }
    }
}

/// Draws the view's add/edit modal over everything else.
fn render_modal(f: &mut Frame, state: &DashboardState, view: Option<View>, palette: &Palette) {
    let area = f.area();
    match view {
        Some(View::Personal) | Some(View::Business) => {
            let passwords = if view == Some(View::Personal) {
                &state.personal
            } else {
                &state.business
            };
            if let Some(editor) = passwords.log.editor() {
                let title = if editor.is_new() {
                    "Add Password"
                } else {
                    "Edit Password"
                };
                modal::render_editor(f, area, editor, title, palette);
            }
        }
        Some(View::Links) => {
            if let Some(editor) = state.links.editor() {
                let title = if editor.is_new() { "Add Link" } else { "Edit Link" };
                modal::render_editor(f, area, editor, title, palette);
            }
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::PasswordEntry;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(state: &DashboardState, view: Option<View>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal
            .draw(|f| render_dashboard(f, state, view, Theme::Dark, true))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn password_rows_are_masked_until_revealed() {
        let mut state = DashboardState::default();
        state.personal.log.save(PasswordEntry {
            name: "Mail".into(),
            email: "me@example.com".into(),
            password: "hunter2".into(),
            ..PasswordEntry::default()
        });

        let screen = draw(&state, Some(View::Personal));
        assert!(screen.contains("Personal Password Log"));
        assert!(screen.contains("me@example.com"));
        assert!(screen.contains("••••••••"));
        assert!(!screen.contains("hunter2"));

        state.personal.toggle_reveal_selected();
        assert!(draw(&state, Some(View::Personal)).contains("hunter2"));
    }

    #[test]
    fn bare_dashboard_shows_empty_outlet() {
        let state = DashboardState::default();
        let screen = draw(&state, None);
        assert!(screen.contains("Select a log from the sidebar"));
        assert!(screen.contains("Links Log"));
    }

    #[test]
    fn open_modal_is_drawn_over_the_table() {
        let mut state = DashboardState::default();
        state.links.begin_add();
        let screen = draw(&state, Some(View::Links));
        assert!(screen.contains("Add Link"));
        assert!(screen.contains("Tags (comma-separated)"));
    }
}
