//! Dashboard state management
//!
//! Owns the three list views, the sidebar flag and the activity log.

use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::events::Event;
use crate::logging::LogLevel;
use crate::logs::{LINKS_TITLE, LinksLog, LogKind, PasswordLog};
use crate::router::View;

use std::collections::VecDeque;

#[derive(Debug)]
pub struct DashboardState {
    /// Whether the navigation sidebar is shown.
    pub sidebar_open: bool,
    pub personal: PasswordLog,
    pub business: PasswordLog,
    pub links: LinksLog,
    /// Activity logs for display (last `MAX_ACTIVITY_LOGS` events)
    pub activity_logs: VecDeque<Event>,
    /// Events below this level stay out of the activity panel.
    pub log_threshold: LogLevel,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl DashboardState {
    /// Creates a dashboard with three empty, independent logs.
    pub fn new(log_threshold: LogLevel) -> Self {
        Self {
            // Wide screens always show the navigation; `s` hides it.
            sidebar_open: true,
            personal: PasswordLog::new(LogKind::Personal),
            business: PasswordLog::new(LogKind::Business),
            links: LinksLog::new(),
            activity_logs: VecDeque::new(),
            log_threshold,
        }
    }

    pub fn password_log_mut(&mut self, kind: LogKind) -> &mut PasswordLog {
        match kind {
            LogKind::Personal => &mut self.personal,
            LogKind::Business => &mut self.business,
        }
    }

    /// Heading of the view mounted at `view`.
    pub fn title(&self, view: Option<View>) -> String {
        match view {
            Some(View::Personal) => self.personal.title(),
            Some(View::Business) => self.business.title(),
            Some(View::Links) => LINKS_TITLE.to_string(),
            None => "Dashboard".to_string(),
        }
    }

    /// Whether the view's add/edit modal is open.
    pub fn is_modal_open(&self, view: Option<View>) -> bool {
        match view {
            Some(View::Personal) => self.personal.log.is_modal_open(),
            Some(View::Business) => self.business.log.is_modal_open(),
            Some(View::Links) => self.links.is_modal_open(),
            None => false,
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Events the activity panel shows, newest first.
    pub fn visible_events(&self) -> impl Iterator<Item = &Event> {
        self.activity_logs
            .iter()
            .rev()
            .filter(|event| event.should_display(self.log_threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activity_log_is_capped() {
        let mut state = DashboardState::default();
        for i in 0..MAX_ACTIVITY_LOGS + 5 {
            state.add_to_activity_log(Event::session(format!("event {i}")));
        }
        assert_eq!(state.activity_logs.len(), MAX_ACTIVITY_LOGS);
        assert_eq!(state.activity_logs.front().unwrap().msg, "event 5");
    }

    #[test]
    fn visible_events_respect_threshold() {
        let mut state = DashboardState::new(LogLevel::Info);
        state.add_to_activity_log(Event::navigated("/dashboard"));
        state.add_to_activity_log(Event::theme("Dark"));
        let shown: Vec<_> = state.visible_events().map(|e| e.msg.as_str()).collect();
        assert_eq!(shown, vec!["Dark"]);
    }

    #[test]
    fn logs_start_empty_and_independent() {
        let state = DashboardState::default();
        assert!(state.personal.log.is_empty());
        assert!(state.business.log.is_empty());
        assert!(state.links.is_empty());
        assert_eq!(state.title(Some(View::Business)), "Business Password Log");
        assert_eq!(state.title(Some(View::Links)), "Links Log");
        assert!(!state.is_modal_open(Some(View::Personal)));
    }

    #[test]
    fn sidebar_starts_open() {
        assert!(DashboardState::default().sidebar_open);
    }
}
