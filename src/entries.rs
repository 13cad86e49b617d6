//! Password and link entries.
//!
//! Entries live only in memory; nothing here is serialized.

use std::fmt::Debug;

/// Identifier of an entry that has not been saved yet.
pub const SENTINEL_ID: u64 = 0;

/// A row in one of the logs.
pub trait Entry: Clone + Debug {
    fn id(&self) -> u64;

    fn set_id(&mut self, id: u64);

    /// Empty template used when adding a new entry.
    fn blank() -> Self;

    /// Display name, used in activity messages.
    fn name(&self) -> &str;

    fn is_new(&self) -> bool {
        self.id() == SENTINEL_ID
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, strum::Display, strum::EnumString)]
pub enum PasswordType {
    #[default]
    Free,
    Paid,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PasswordEntry {
    pub id: u64,
    pub name: String,
    pub email: String,
    /// Stored and shown as plain text.
    pub password: String,
    pub link: String,
    pub description: String,
    pub kind: PasswordType,
    /// Carried along but never shown or edited.
    #[allow(unused)]
    pub sublinks: Vec<String>,
}

impl Entry for PasswordEntry {
    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn blank() -> Self {
        Self::default()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkEntry {
    pub id: u64,
    pub name: String,
    pub url: String,
    pub description: String,
    /// Free text, not an enumeration.
    pub category: String,
    pub tags: Vec<String>,
}

impl Entry for LinkEntry {
    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn blank() -> Self {
        Self::default()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Splits a comma-separated tag list, trimming every token.
///
/// Empty tokens are kept, so `"a,"` yields `["a", ""]`.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',').map(|tag| tag.trim().to_string()).collect()
}
