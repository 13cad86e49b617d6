//! Activity events
//!
//! Every state change the user triggers produces an [`Event`]. Events are
//! forwarded to the `log` facade and kept for the dashboard's activity panel.

use crate::logging::{LogLevel, should_log};
use crate::router::View;
use chrono::Local;
use std::fmt::Display;

/// Part of the app an event came from.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Origin {
    /// Login, register and session transitions.
    Session,
    /// Route changes and the sidebar.
    Router,
    Theme,
    /// One of the three list views.
    Log(View),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Created,
    Updated,
    Deleted,
    Navigated,
    Toggled,
    Session,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub origin: Origin,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    pub fn new(
        origin: Origin,
        msg: impl Into<String>,
        event_type: EventType,
        log_level: LogLevel,
    ) -> Self {
        let event = Self {
            origin,
            msg: msg.into(),
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        };
        log::log!(log::Level::from(log_level), "{event}");
        event
    }

    pub fn session(msg: impl Into<String>) -> Self {
        Self::new(Origin::Session, msg, EventType::Session, LogLevel::Info)
    }

    pub fn navigated(msg: impl Into<String>) -> Self {
        Self::new(Origin::Router, msg, EventType::Navigated, LogLevel::Debug)
    }

    pub fn theme(msg: impl Into<String>) -> Self {
        Self::new(Origin::Theme, msg, EventType::Toggled, LogLevel::Info)
    }

    pub fn log(view: View, msg: impl Into<String>, event_type: EventType) -> Self {
        let level = match event_type {
            EventType::Warning => LogLevel::Warn,
            _ => LogLevel::Info,
        };
        Self::new(Origin::Log(view), msg, event_type, level)
    }

    /// Whether the activity panel shows this event under `threshold`.
    pub fn should_display(&self, threshold: LogLevel) -> bool {
        should_log(self.log_level, threshold)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}
