//! Password and link logs
//!
//! Both logs share [`EntryLog`]: an ordered list, an optional open editor, and
//! a row cursor. Saving is an upsert keyed by id.

use crate::consts::cli_consts::{PASSWORD_MASK, URL_DISPLAY_WIDTH};
use crate::editor::{EntryEditor, FormEntry};
use crate::entries::{Entry, LinkEntry, PasswordEntry};
use crate::ids::{IdSource, TimestampIds};
use std::collections::HashSet;
use std::fmt;

/// Result of [`EntryLog::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new entry was appended.
    Created(u64),
    /// An existing entry was replaced in place.
    Updated(u64),
    /// A new entry got an id already in use and replaced that entry.
    Overwrote(u64),
    /// No entry carries this id; the list is unchanged.
    Unmatched(u64),
}

pub struct EntryLog<E: FormEntry> {
    entries: Vec<E>,
    /// The open modal, if any. Its target is the entry being edited.
    editor: Option<EntryEditor<E>>,
    selected: usize,
    ids: Box<dyn IdSource>,
}

impl<E: FormEntry> fmt::Debug for EntryLog<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntryLog")
            .field("entries", &self.entries)
            .field("editor", &self.editor)
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}

impl<E: FormEntry> Default for EntryLog<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: FormEntry> EntryLog<E> {
    /// Creates an empty log that stamps new entries with the current time.
    pub fn new() -> Self {
        Self::with_id_source(TimestampIds)
    }

    pub fn with_id_source(ids: impl IdSource + 'static) -> Self {
        Self {
            entries: Vec::new(),
            editor: None,
            selected: 0,
            ids: Box::new(ids),
        }
    }

    pub fn entries(&self) -> &[E] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_modal_open(&self) -> bool {
        self.editor.is_some()
    }

    pub fn editor(&self) -> Option<&EntryEditor<E>> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut EntryEditor<E>> {
        self.editor.as_mut()
    }

    /// Opens the modal on a blank template.
    pub fn begin_add(&mut self) {
        self.editor = Some(EntryEditor::open(None));
    }

    /// Opens the modal on a copy of `entry`.
    pub fn begin_edit(&mut self, entry: &E) {
        self.editor = Some(EntryEditor::open(Some(entry.clone())));
    }

    /// Opens the modal on the selected row. Returns false on an empty log.
    pub fn begin_edit_selected(&mut self) -> bool {
        match self.selected_entry().cloned() {
            Some(entry) => {
                self.begin_edit(&entry);
                true
            }
            None => false,
        }
    }

    pub fn close_modal(&mut self) {
        self.editor = None;
    }

    /// Removes the entry with `id`. Unknown ids leave the list unchanged.
    pub fn delete(&mut self, id: u64) -> Option<E> {
        let index = self.entries.iter().position(|e| e.id() == id)?;
        let removed = self.entries.remove(index);
        self.clamp_selection();
        log::debug!("Deleted entry {id}");
        Some(removed)
    }

    pub fn delete_selected(&mut self) -> Option<E> {
        let id = self.selected_entry()?.id();
        self.delete(id)
    }

    /// Upserts `entry` and closes the modal.
    ///
    /// A sentinel id gets a fresh id and is appended; any other id replaces the
    /// matching entry without moving it.
    pub fn save(&mut self, mut entry: E) -> SaveOutcome {
        self.editor = None;

        if entry.is_new() {
            let id = self.ids.next_id();
            entry.set_id(id);
            if let Some(slot) = self.entries.iter_mut().find(|e| e.id() == id) {
                log::warn!("Entry id {id} already in use, overwriting");
                *slot = entry;
                return SaveOutcome::Overwrote(id);
            }
            self.entries.push(entry);
            self.selected = self.entries.len() - 1;
            return SaveOutcome::Created(id);
        }

        let id = entry.id();
        match self.entries.iter_mut().find(|e| e.id() == id) {
            Some(slot) => {
                *slot = entry;
                SaveOutcome::Updated(id)
            }
            None => SaveOutcome::Unmatched(id),
        }
    }

    /// Submits the open modal. Returns `None` when no modal is open or the
    /// form has a constraint violation (kept on the editor for display).
    pub fn submit_editor(&mut self) -> Option<SaveOutcome> {
        let draft = self.editor.as_mut()?.submit().ok()?;
        Some(self.save(draft))
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_entry(&self) -> Option<&E> {
        self.entries.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.is_empty() {
            self.selected = (self.selected + 1).min(self.len() - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.entries.len().saturating_sub(1));
    }
}

/// Which password log a [`PasswordLog`] is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display)]
pub enum LogKind {
    #[default]
    Personal,
    Business,
}

#[derive(Debug, Default)]
pub struct PasswordLog {
    pub kind: LogKind,
    pub log: EntryLog<PasswordEntry>,
    /// Rows whose password is shown in clear.
    revealed: HashSet<u64>,
}

impl PasswordLog {
    pub fn new(kind: LogKind) -> Self {
        Self::with_log(kind, EntryLog::new())
    }

    pub fn with_log(kind: LogKind, log: EntryLog<PasswordEntry>) -> Self {
        Self {
            kind,
            log,
            revealed: HashSet::new(),
        }
    }

    pub fn title(&self) -> String {
        format!("{} Password Log", self.kind)
    }

    pub fn add_label(&self) -> &'static str {
        "Add New Entry"
    }

    pub fn toggle_reveal(&mut self, id: u64) {
        if !self.revealed.remove(&id) {
            self.revealed.insert(id);
        }
    }

    pub fn toggle_reveal_selected(&mut self) {
        if let Some(id) = self.log.selected_entry().map(Entry::id) {
            self.toggle_reveal(id);
        }
    }

    pub fn is_revealed(&self, id: u64) -> bool {
        self.revealed.contains(&id)
    }

    /// The password as the table shows it.
    pub fn display_password<'a>(&self, entry: &'a PasswordEntry) -> &'a str {
        if self.is_revealed(entry.id) {
            &entry.password
        } else {
            PASSWORD_MASK
        }
    }

    pub fn delete(&mut self, id: u64) -> Option<PasswordEntry> {
        self.revealed.remove(&id);
        self.log.delete(id)
    }

    pub fn delete_selected(&mut self) -> Option<PasswordEntry> {
        let id = self.log.selected_entry()?.id;
        self.delete(id)
    }
}

pub type LinksLog = EntryLog<LinkEntry>;

pub const LINKS_TITLE: &str = "Links Log";
pub const LINKS_ADD_LABEL: &str = "Add New Link";

/// Shortens long URLs for the table, keeping the first characters.
pub fn display_url(url: &str) -> String {
    if url.chars().count() > URL_DISPLAY_WIDTH {
        let head: String = url.chars().take(URL_DISPLAY_WIDTH).collect();
        format!("{head}...")
    } else {
        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entries::SENTINEL_ID;

    fn sequential() -> impl IdSource {
        let mut n: u64 = 1000;
        move || {
            n += 1;
            n
        }
    }

    fn link(name: &str) -> LinkEntry {
        LinkEntry {
            name: name.to_string(),
            url: format!("https://{name}.example"),
            ..LinkEntry::default()
        }
    }

    fn links_with(names: &[&str]) -> LinksLog {
        let mut log = LinksLog::with_id_source(sequential());
        for name in names {
            log.save(link(name));
        }
        log
    }

    fn names(log: &LinksLog) -> Vec<&str> {
        log.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn new_entries_are_appended_with_fresh_ids() {
        let log = links_with(&["a", "b", "c"]);
        assert_eq!(log.len(), 3);
        assert_eq!(names(&log), vec!["a", "b", "c"]);
        let ids: HashSet<u64> = log.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids.len(), 3);
        assert!(!ids.contains(&SENTINEL_ID));
    }

    #[test]
    /// Same-millisecond saves share an id and collapse into one entry.
    fn colliding_ids_overwrite_previous_entry() {
        let mut log = LinksLog::with_id_source(|| 42u64);
        assert_eq!(log.save(link("first")), SaveOutcome::Created(42));
        assert_eq!(log.save(link("second")), SaveOutcome::Overwrote(42));
        assert_eq!(names(&log), vec!["second"]);
    }

    #[test]
    fn saving_existing_id_replaces_in_place() {
        let mut log = links_with(&["a", "b", "c"]);
        let mut edited = log.entries()[1].clone();
        edited.name = "B".into();

        assert_eq!(log.save(edited.clone()), SaveOutcome::Updated(edited.id));
        assert_eq!(log.len(), 3);
        assert_eq!(names(&log), vec!["a", "B", "c"]);
    }

    #[test]
    fn saving_unknown_id_changes_nothing() {
        let mut log = links_with(&["a"]);
        let mut stray = link("ghost");
        stray.id = 9;
        assert_eq!(log.save(stray), SaveOutcome::Unmatched(9));
        assert_eq!(names(&log), vec!["a"]);
    }

    #[test]
    fn delete_removes_only_matching_entry() {
        let mut log = links_with(&["a", "b", "c"]);
        let id = log.entries()[1].id;
        assert_eq!(log.delete(id).map(|e| e.name), Some("b".to_string()));
        assert_eq!(names(&log), vec!["a", "c"]);

        assert!(log.delete(id).is_none());
        assert_eq!(log.len(), 2);
    }

    #[test]
    fn save_closes_modal_on_both_paths() {
        let mut log = links_with(&["a"]);
        log.begin_add();
        assert!(log.is_modal_open());
        log.save(link("b"));
        assert!(!log.is_modal_open());

        let first = log.entries()[0].clone();
        log.begin_edit(&first);
        assert_eq!(log.editor().map(|e| e.draft()), Some(&first));
        log.save(first);
        assert!(!log.is_modal_open());
    }

    #[test]
    fn submit_editor_upserts_draft() {
        let mut log = links_with(&["a"]);
        log.begin_edit_selected();
        let editor = log.editor_mut().unwrap();
        editor.set_field("tags", "x, y");
        let outcome = log.submit_editor().unwrap();
        assert!(matches!(outcome, SaveOutcome::Updated(_)));
        assert_eq!(log.entries()[0].tags, vec!["x", "y"]);
    }

    #[test]
    fn submit_editor_keeps_modal_open_on_violation() {
        let mut log = LinksLog::with_id_source(sequential());
        log.begin_add();
        assert!(log.submit_editor().is_none());
        assert!(log.is_modal_open());
        assert!(log.editor().unwrap().violation().is_some());
        assert!(log.is_empty());
    }

    #[test]
    fn close_modal_discards_draft() {
        let mut log = links_with(&["a"]);
        log.begin_edit_selected();
        log.editor_mut().unwrap().set_field("name", "changed");
        log.close_modal();
        assert_eq!(names(&log), vec!["a"]);
    }

    #[test]
    fn selection_is_clamped() {
        let mut log = links_with(&["a", "b"]);
        assert_eq!(log.selected(), 1);
        log.select_next();
        assert_eq!(log.selected(), 1);
        log.delete_selected();
        assert_eq!(log.selected(), 0);
        log.select_prev();
        log.delete_selected();
        assert!(log.selected_entry().is_none());
        assert!(!log.begin_edit_selected());
    }

    #[test]
    fn password_reveal_is_per_row() {
        let mut log = PasswordLog::with_log(
            LogKind::Business,
            EntryLog::with_id_source(sequential()),
        );
        for name in ["a", "b"] {
            log.log.save(PasswordEntry {
                name: name.into(),
                password: format!("{name}-secret"),
                ..PasswordEntry::default()
            });
        }
        let first = log.log.entries()[0].clone();
        let second = log.log.entries()[1].clone();

        log.toggle_reveal(first.id);
        assert_eq!(log.display_password(&first), "a-secret");
        assert_eq!(log.display_password(&second), PASSWORD_MASK);

        log.toggle_reveal(first.id);
        assert_eq!(log.display_password(&first), PASSWORD_MASK);
        assert_eq!(log.title(), "Business Password Log");
    }

    #[test]
    fn long_urls_are_truncated() {
        assert_eq!(display_url("https://short.example"), "https://short.example");
        let long = "https://example.com/a/very/long/path/indeed";
        assert_eq!(display_url(long), "https://example.com/a/very/lon...");
    }
}
