//! Dashboard key handling
//!
//! Translates key presses into list operations and records the resulting
//! activity events.

use super::state::DashboardState;
use crate::editor::{FormEntry, InputKind};
use crate::entries::Entry;
use crate::events::{Event, EventType};
use crate::logs::{EntryLog, LogKind, SaveOutcome};
use crate::router::View;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the app has to do after the dashboard handled a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    None,
    Navigate(View),
    ToggleTheme,
    Quit,
}

impl DashboardState {
    /// Handles a key for the view currently mounted in the outlet.
    pub fn handle_key(&mut self, view: Option<View>, key: KeyEvent) -> DashboardAction {
        let event = match view {
            Some(View::Personal) if self.personal.log.is_modal_open() => {
                handle_editor_key(&mut self.personal.log, View::Personal, key)
            }
            Some(View::Business) if self.business.log.is_modal_open() => {
                handle_editor_key(&mut self.business.log, View::Business, key)
            }
            Some(View::Links) if self.links.is_modal_open() => {
                handle_editor_key(&mut self.links, View::Links, key)
            }
            _ => return self.handle_list_key(view, key),
        };
        if let Some(event) = event {
            self.add_to_activity_log(event);
        }
        DashboardAction::None
    }

    fn handle_list_key(&mut self, view: Option<View>, key: KeyEvent) -> DashboardAction {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return DashboardAction::Quit,
            KeyCode::Char('1') => return DashboardAction::Navigate(View::Personal),
            KeyCode::Char('2') => return DashboardAction::Navigate(View::Business),
            KeyCode::Char('3') => return DashboardAction::Navigate(View::Links),
            KeyCode::Char('t') => return DashboardAction::ToggleTheme,
            KeyCode::Char('s') => {
                self.sidebar_open = !self.sidebar_open;
                let msg = if self.sidebar_open {
                    "Sidebar opened"
                } else {
                    "Sidebar closed"
                };
                self.add_to_activity_log(Event::navigated(msg));
                return DashboardAction::None;
            }
            _ => {}
        }

        let event = match view {
            Some(View::Personal) => self.handle_password_key(LogKind::Personal, key),
            Some(View::Business) => self.handle_password_key(LogKind::Business, key),
            Some(View::Links) => handle_row_key(&mut self.links, View::Links, key),
            None => None,
        };
        if let Some(event) = event {
            self.add_to_activity_log(event);
        }
        DashboardAction::None
    }

    fn handle_password_key(&mut self, kind: LogKind, key: KeyEvent) -> Option<Event> {
        let view = match kind {
            LogKind::Personal => View::Personal,
            LogKind::Business => View::Business,
        };
        let passwords = self.password_log_mut(kind);
        match key.code {
            KeyCode::Char('v') => {
                passwords.toggle_reveal_selected();
                None
            }
            KeyCode::Char('d') | KeyCode::Delete => passwords
                .delete_selected()
                .map(|removed| deleted_event(view, &removed)),
            _ => handle_row_key(&mut passwords.log, view, key),
        }
    }
}

/// Keys shared by every list: cursor, add, edit, delete.
fn handle_row_key<E: FormEntry>(
    log: &mut EntryLog<E>,
    view: View,
    key: KeyEvent,
) -> Option<Event> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => log.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => log.select_next(),
        KeyCode::Char('a') => log.begin_add(),
        KeyCode::Char('e') | KeyCode::Enter => {
            log.begin_edit_selected();
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            return log.delete_selected().map(|removed| deleted_event(view, &removed));
        }
        _ => {}
    }
    None
}

/// Keys while the add/edit modal is open.
fn handle_editor_key<E: FormEntry>(
    log: &mut EntryLog<E>,
    view: View,
    key: KeyEvent,
) -> Option<Event> {
    let editor = log.editor_mut()?;
    let input = editor.focused_field().input;
    let on_select = input == InputKind::Select;
    let new_line = key.modifiers.intersects(KeyModifiers::ALT | KeyModifiers::SHIFT);
    match key.code {
        KeyCode::Esc => log.close_modal(),
        KeyCode::Enter if new_line && input == InputKind::TextArea => editor.push_char('\n'),
        KeyCode::Enter => {
            let name = editor.draft().name().to_string();
            return log
                .submit_editor()
                .map(|outcome| saved_event(view, outcome, &name));
        }
        KeyCode::Tab | KeyCode::Down => editor.focus_next(),
        KeyCode::BackTab | KeyCode::Up => editor.focus_prev(),
        KeyCode::Left if on_select => editor.cycle_option(false),
        KeyCode::Right if on_select => editor.cycle_option(true),
        KeyCode::Backspace => editor.pop_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => editor.push_char(c),
        _ => {}
    }
    None
}

fn saved_event(view: View, outcome: SaveOutcome, name: &str) -> Event {
    match outcome {
        SaveOutcome::Created(_) => Event::log(view, format!("Added '{name}'"), EventType::Created),
        SaveOutcome::Updated(_) => {
            Event::log(view, format!("Updated '{name}'"), EventType::Updated)
        }
        SaveOutcome::Overwrote(id) => Event::log(
            view,
            format!("Id {id} already in use; '{name}' replaced the earlier entry"),
            EventType::Warning,
        ),
        SaveOutcome::Unmatched(id) => Event::log(
            view,
            format!("No entry with id {id}; '{name}' was not saved"),
            EventType::Warning,
        ),
    }
}

fn deleted_event<E: Entry>(view: View, removed: &E) -> Event {
    Event::log(
        view,
        format!("Deleted '{}'", removed.name()),
        EventType::Deleted,
    )
}
