//! TUI mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_starting},
};
use crate::error::AppError;
use crate::ui::{self, UIConfig};
use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Runs the application in TUI mode
///
/// Sets up the terminal, runs the UI until the user quits and restores the
/// terminal on every path out of raw mode, including a failed setup.
pub async fn run_tui_mode(session: SessionData) -> Result<(), AppError> {
    print_session_starting(&session.route);

    enable_raw_mode()?;
    let result = run_in_alternate_screen(session).await;
    let restored = restore_terminal(&mut io::stdout());

    result?;
    restored?;
    print_session_exit_success();
    Ok(())
}

/// Everything between entering and leaving raw mode.
async fn run_in_alternate_screen(session: SessionData) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Initialize the terminal with Crossterm backend
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let ui_config = UIConfig::new(
        session.with_background_color,
        session.theme,
        session.route,
        session.log_threshold,
    );
    let app = ui::App::new(ui_config);
    ui::run(&mut terminal, app).await
}

/// Leaves raw mode and the alternate screen and shows the cursor.
///
/// Every step runs even when an earlier one fails; the first failure is returned.
fn restore_terminal(out: &mut impl io::Write) -> io::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(out, LeaveAlternateScreen, Show);
    raw.and(screen)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_leaves_alternate_screen_and_shows_cursor() {
        let mut out: Vec<u8> = Vec::new();
        restore_terminal(&mut out).unwrap();
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains("\x1b[?1049l"));
        assert!(written.contains("\x1b[?25h"));
    }

    /// A writer whose every write fails, like a closed terminal.
    struct Broken;

    impl io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn restore_reports_screen_failure_after_leaving_raw_mode() {
        let err = restore_terminal(&mut Broken).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
