//! Entry editor (the add/edit modal)
//!
//! Holds a draft copy of the entry being edited. The draft is seeded once when
//! the editor opens and updated field by field; the list only sees it on submit.

use crate::entries::{Entry, LinkEntry, PasswordEntry, PasswordType, split_tags};
use std::fmt;

/// How a field is entered, and which native checks apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    /// Masked while typing.
    Password,
    Url,
    TextArea,
    /// Cycles through [`FormEntry::options`].
    Select,
    /// Comma-separated list, split with [`split_tags`].
    Tags,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputKind,
    pub required: bool,
}

impl Field {
    const fn new(
        name: &'static str,
        label: &'static str,
        input: InputKind,
        required: bool,
    ) -> Self {
        Self {
            name,
            label,
            input,
            required,
        }
    }
}

/// An entry that can be edited through an [`EntryEditor`].
pub trait FormEntry: Entry {
    /// Fields in display order.
    const FIELDS: &'static [Field];

    /// Current value of a field as the editor shows it.
    fn field_text(&self, name: &str) -> String;

    /// Applies an edit by field name. Unknown names are ignored.
    fn set_field(&mut self, name: &str, value: &str);

    /// Choices for a select field.
    fn options(_name: &str) -> &'static [&'static str] {
        &[]
    }
}

impl FormEntry for PasswordEntry {
    const FIELDS: &'static [Field] = &[
        Field::new("name", "Name", InputKind::Text, true),
        Field::new("email", "Email", InputKind::Email, true),
        Field::new("password", "Password", InputKind::Password, true),
        Field::new("link", "Link", InputKind::Url, false),
        Field::new("description", "Description", InputKind::TextArea, false),
        Field::new("type", "Type", InputKind::Select, false),
    ];

    fn field_text(&self, name: &str) -> String {
        match name {
            "name" => self.name.clone(),
            "email" => self.email.clone(),
            "password" => self.password.clone(),
            "link" => self.link.clone(),
            "description" => self.description.clone(),
            "type" => self.kind.to_string(),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, name: &str, value: &str) {
        match name {
            "name" => self.name = value.to_string(),
            "email" => self.email = value.to_string(),
            "password" => self.password = value.to_string(),
            "link" => self.link = value.to_string(),
            "description" => self.description = value.to_string(),
            "type" => match value.parse::<PasswordType>() {
                Ok(kind) => self.kind = kind,
                Err(_) => log::debug!("Ignoring unknown password type {value:?}"),
            },
            _ => log::debug!("Ignoring edit to unknown field {name:?}"),
        }
    }

    fn options(name: &str) -> &'static [&'static str] {
        match name {
            "type" => &["Free", "Paid"],
            _ => &[],
        }
    }
}

impl FormEntry for LinkEntry {
    const FIELDS: &'static [Field] = &[
        Field::new("name", "Name", InputKind::Text, true),
        Field::new("url", "URL", InputKind::Url, true),
        Field::new("description", "Description", InputKind::TextArea, false),
        Field::new("category", "Category", InputKind::Text, false),
        Field::new("tags", "Tags (comma-separated)", InputKind::Tags, false),
    ];

    fn field_text(&self, name: &str) -> String {
        match name {
            "name" => self.name.clone(),
            "url" => self.url.clone(),
            "description" => self.description.clone(),
            "category" => self.category.clone(),
            "tags" => self.tags.join(", "),
            _ => String::new(),
        }
    }

    fn set_field(&mut self, name: &str, value: &str) {
        match name {
            "name" => self.name = value.to_string(),
            "url" => self.url = value.to_string(),
            "description" => self.description = value.to_string(),
            "category" => self.category = value.to_string(),
            "tags" => self.tags = split_tags(value),
            _ => log::debug!("Ignoring edit to unknown field {name:?}"),
        }
    }
}

/// A field failed one of its native input constraints; the form stays open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintViolation {
    pub field: &'static str,
    pub reason: &'static str,
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

/// Checks a value the way the matching HTML input type would.
fn check_field(field: &Field, value: &str) -> Result<(), ConstraintViolation> {
    let violation = |reason| ConstraintViolation {
        field: field.label,
        reason,
    };
    if value.is_empty() {
        return if field.required {
            Err(violation("Please fill out this field."))
        } else {
            Ok(())
        };
    }
    match field.input {
        InputKind::Email if !is_valid_email(value) => {
            Err(violation("Please enter an email address."))
        }
        InputKind::Url if url::Url::parse(value).is_err() => Err(violation("Please enter a URL.")),
        _ => Ok(()),
    }
}

/// `local@domain` with no whitespace and a single `@`.
fn is_valid_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !value.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[derive(Debug, Clone)]
pub struct EntryEditor<E: FormEntry> {
    /// The entry this editor was opened on, `None` when adding.
    target: Option<E>,
    draft: E,
    /// Raw text per field, parallel to `E::FIELDS`.
    buffers: Vec<String>,
    focus: usize,
    violation: Option<ConstraintViolation>,
}

impl<E: FormEntry> EntryEditor<E> {
    /// Opens the editor on a copy of `target`, or on a blank template.
    pub fn open(target: Option<E>) -> Self {
        let draft = target.clone().unwrap_or_else(E::blank);
        let buffers = E::FIELDS.iter().map(|f| draft.field_text(f.name)).collect();
        Self {
            target,
            draft,
            buffers,
            focus: 0,
            violation: None,
        }
    }

    pub fn draft(&self) -> &E {
        &self.draft
    }

    pub fn is_new(&self) -> bool {
        self.target.is_none()
    }

    pub fn fields(&self) -> &'static [Field] {
        E::FIELDS
    }

    /// Raw text of the field at `index`.
    pub fn buffer(&self, index: usize) -> &str {
        self.buffers.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn focused_field(&self) -> &'static Field {
        &E::FIELDS[self.focus]
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % E::FIELDS.len();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.checked_sub(1).unwrap_or(E::FIELDS.len() - 1);
    }

    pub fn violation(&self) -> Option<&ConstraintViolation> {
        self.violation.as_ref()
    }

    /// Sets a field by name, updating both its text and the draft.
    pub fn set_field(&mut self, name: &str, value: &str) {
        if let Some(index) = E::FIELDS.iter().position(|f| f.name == name) {
            self.buffers[index] = value.to_string();
        }
        self.draft.set_field(name, value);
        self.violation = None;
    }

    /// Types a character into the focused field.
    pub fn push_char(&mut self, c: char) {
        let field = self.focused_field();
        if field.input == InputKind::Select {
            if c == ' ' {
                self.cycle_option(true);
            }
            return;
        }
        let mut value = self.buffers[self.focus].clone();
        value.push(c);
        self.set_field(field.name, &value);
    }

    /// Deletes the last character of the focused field.
    pub fn pop_char(&mut self) {
        let field = self.focused_field();
        if field.input == InputKind::Select {
            return;
        }
        let mut value = self.buffers[self.focus].clone();
        if value.pop().is_some() {
            self.set_field(field.name, &value);
        }
    }

    /// Moves a focused select field to the next or previous option.
    pub fn cycle_option(&mut self, forward: bool) {
        let field = self.focused_field();
        let options = E::options(field.name);
        if options.is_empty() {
            return;
        }
        let current = options
            .iter()
            .position(|o| *o == self.buffers[self.focus])
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            current.checked_sub(1).unwrap_or(options.len() - 1)
        };
        self.set_field(field.name, options[next]);
    }

    /// Runs the native checks over every field, in display order.
    pub fn validate(&self) -> Result<(), ConstraintViolation> {
        E::FIELDS
            .iter()
            .zip(&self.buffers)
            .try_for_each(|(field, value)| check_field(field, value))
    }

    /// Returns the draft for saving, or records why the form cannot be submitted.
    pub fn submit(&mut self) -> Result<E, ConstraintViolation> {
        match self.validate() {
            Ok(()) => {
                self.violation = None;
                Ok(self.draft.clone())
            }
            Err(violation) => {
                if let Some(index) = E::FIELDS.iter().position(|f| f.label == violation.field) {
                    self.focus = index;
                }
                self.violation = Some(violation.clone());
                Err(violation)
            }
        }
    }
}
