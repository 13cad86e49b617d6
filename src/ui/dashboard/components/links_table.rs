//! Links log view

use crate::logs::{LINKS_ADD_LABEL, LINKS_TITLE, LinksLog, display_url};
use crate::theme::Palette;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::prelude::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table, TableState};

const COLUMNS: [&str; 5] = ["NAME", "URL", "DESCRIPTION", "CATEGORY", "TAGS"];

/// Tags as chips, `[rust] [cli]`.
fn tag_chips<'a>(tags: &'a [String], palette: &Palette) -> Line<'a> {
    let chip = Style::default().fg(palette.chip_fg).bg(palette.chip_bg);
    let mut spans = Vec::with_capacity(tags.len() * 2);
    for tag in tags {
        if !spans.is_empty() {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(format!("[{tag}]"), chip));
    }
    Line::from(spans)
}

pub fn render_links_log(f: &mut Frame, area: Rect, links: &LinksLog, palette: &Palette) {
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
        LINKS_TITLE,
        LINKS_ADD_LABEL,
        palette,
    );

    let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c))).style(
        Style::default()
            .fg(palette.muted)
            .bg(palette.table_header)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = links
        .entries()
        .iter()
        .map(|entry| {
            Row::new(vec![
                Cell::from(entry.name.as_str()),
                Cell::from(Span::styled(
                    format!("{} ↗", display_url(&entry.url)),
                    Style::default()
                        .fg(palette.accent)
                        .add_modifier(Modifier::UNDERLINED),
                )),
                Cell::from(entry.description.as_str()),
                Cell::from(entry.category.as_str()),
                Cell::from(tag_chips(&entry.tags, palette)),
            ])
            .style(Style::default().fg(palette.row_text))
        })
        .collect();

    let empty = rows.is_empty();
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(16),
            Constraint::Percentage(30),
            Constraint::Percentage(22),
            Constraint::Percentage(12),
            Constraint::Percentage(20),
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
        table_state.select(Some(links.selected()));
    }
    f.render_stateful_widget(table, chunks[2], &mut table_state);

    if empty {
        let hint = Paragraph::new(Span::styled(
            "No links yet. Press [a] to add one.",
            Style::default().fg(palette.muted),
        ));
        f.render_widget(hint, chunks[2].inner(Margin::new(2, 2)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn chips_keep_empty_tags() {
        let palette = Palette::for_theme(Theme::Light);
        let tags = vec!["rust".to_string(), String::new()];
        let line = tag_chips(&tags, &palette);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "[rust] []");
    }
}
