//! Process-wide light/dark theme.
//!
//! A [`ThemeContext`] is handed to every view; all clones share one flag, so a
//! toggle from any of them is seen by every reader on the next frame.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::rc::Rc;

#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Shared handle to the current theme.
#[derive(Debug, Clone, Default)]
pub struct ThemeContext {
    current: Rc<Cell<Theme>>,
}

impl ThemeContext {
    pub fn new(initial: Theme) -> Self {
        Self {
            current: Rc::new(Cell::new(initial)),
        }
    }

    pub fn theme(&self) -> Theme {
        self.current.get()
    }

    /// Flips the theme and returns the new value.
    pub fn toggle(&self) -> Theme {
        let next = self.current.get().toggled();
        self.current.set(next);
        log::debug!("Theme switched to {next}");
        next
    }

    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.theme())
    }
}

/// Terminal colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Screen background
    pub background: Color,
    /// Panels, tables and the modal
    pub surface: Color,
    pub table_header: Color,
    pub text: Color,
    pub row_text: Color,
    pub muted: Color,
    pub accent: Color,
    pub danger: Color,
    pub chip_fg: Color,
    pub chip_bg: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Palette {
                background: Color::Rgb(243, 244, 246),
                surface: Color::Rgb(255, 255, 255),
                table_header: Color::Rgb(249, 250, 251),
                text: Color::Rgb(17, 24, 39),
                row_text: Color::Rgb(17, 24, 39),
                muted: Color::Rgb(107, 114, 128),
                accent: Color::Rgb(79, 70, 229),
                danger: Color::Rgb(220, 38, 38),
                chip_fg: Color::Rgb(55, 48, 163),
                chip_bg: Color::Rgb(224, 231, 255),
            },
            Theme::Dark => Palette {
                background: Color::Rgb(17, 24, 39),
                surface: Color::Rgb(31, 41, 55),
                table_header: Color::Rgb(55, 65, 81),
                text: Color::Rgb(255, 255, 255),
                row_text: Color::Rgb(209, 213, 219),
                muted: Color::Rgb(107, 114, 128),
                accent: Color::Rgb(129, 140, 248),
                danger: Color::Rgb(248, 113, 113),
                chip_fg: Color::Rgb(55, 48, 163),
                chip_bg: Color::Rgb(224, 231, 255),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_theme() {
        let ctx = ThemeContext::new(Theme::Dark);
        ctx.toggle();
        ctx.toggle();
        assert_eq!(ctx.theme(), Theme::Dark);
    }

    #[test]
    /// Every clone reads the value written through any other clone.
    fn clones_observe_each_toggle() {
        let provider = ThemeContext::default();
        let header = provider.clone();
        let table = provider.clone();

        assert_eq!(header.toggle(), Theme::Dark);
        assert_eq!(provider.theme(), Theme::Dark);
        assert_eq!(table.theme(), Theme::Dark);

        table.toggle();
        assert_eq!(header.theme(), Theme::Light);
    }

    #[test]
    fn palette_follows_theme() {
        let ctx = ThemeContext::new(Theme::Light);
        let light = ctx.palette();
        ctx.toggle();
        assert_ne!(ctx.palette(), light);
        assert_eq!(ctx.palette(), Palette::for_theme(Theme::Dark));
    }

    #[test]
    fn theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }
}
