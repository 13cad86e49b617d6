//! Unified messaging system for session operations

// ANSI Color Codes for session messages
pub const COLOR_INFO: &str = "\x1b[1;36m"; // Bold Cyan
pub const COLOR_SUCCESS: &str = "\x1b[1;32m"; // Bold Green
pub const COLOR_RESET: &str = "\x1b[0m";

/// Session-specific message types
#[derive(Debug, Clone)]
pub enum SessionMessage {
    /// Normal session start/shutdown messages
    Info(String),
    /// Success messages for completed operations
    Success(String),
}

impl SessionMessage {
    pub fn info(msg: impl Into<String>) -> Self {
        Self::Info(msg.into())
    }

    pub fn success(msg: impl Into<String>) -> Self {
        Self::Success(msg.into())
    }

    /// Text with its colored tag, as printed.
    pub fn render(&self) -> String {
        match self {
            Self::Info(msg) => format!("{COLOR_INFO}[INFO]{COLOR_RESET} {msg}"),
            Self::Success(msg) => format!("{COLOR_SUCCESS}[SUCCESS]{COLOR_RESET} {msg}"),
        }
    }

    pub fn print(&self) {
        println!("{}", self.render());
    }
}

/// Printed before the terminal switches to the alternate screen.
pub fn print_session_starting(route: &str) {
    SessionMessage::info(format!("Starting passlog at {route}")).print();
}

/// Printed after the terminal is restored; the alternate screen hides anything earlier.
pub fn print_session_exit_success() {
    SessionMessage::success("Passlog exited. Entries were not saved.").print();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_their_tag() {
        assert!(SessionMessage::info("hi").render().contains("[INFO]"));
        assert!(SessionMessage::info("hi").render().ends_with(" hi"));
        assert!(SessionMessage::success("ok").render().ends_with(" ok"));
    }
}
