//! Core types for intake forms
//!
//! This module defines:
//! - FormId: Opaque identity of a form record
//! - Fields: The schema-free field bag
//! - FormRecord: One submitted or in-progress intake form

use crate::value::FieldValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

/// Named values of a form, keyed by field name
pub type Fields = BTreeMap<String, FieldValue>;

/// Unique identifier for a form record
///
/// Fresh ids are UUID v4 strings. Ids restored from storage are accepted
/// verbatim, so records written by older versions (which used millisecond
/// timestamps as ids) keep their identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormId(String);

impl FormId {
    /// Create a new random FormId
    pub fn new() -> Self {
        FormId(Uuid::new_v4().to_string())
    }

    /// Wrap an existing id string
    pub fn from_string(id: impl Into<String>) -> Self {
        FormId(id.into())
    }

    /// Borrow the id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FormId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FormId {
    fn from(s: &str) -> Self {
        FormId(s.to_string())
    }
}

impl From<String> for FormId {
    fn from(s: String) -> Self {
        FormId(s)
    }
}

/// One intake form, either saved or being edited
///
/// `submitted_at` is the creation time of the record. Editing and re-saving a
/// record never moves it.
///
/// # Wire Format
///
/// ```text
/// {"id": "…", "submittedAt": "2024-03-05T14:30:00Z", "fields": {"nombre": "Ana"}}
/// ```
///
/// The layout used by the first release of the intake app (`fecha`/`datos`)
/// is accepted on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormRecord {
    /// Identity, immutable after creation
    pub id: FormId,
    /// Creation time
    #[serde(rename = "submittedAt", alias = "fecha")]
    pub submitted_at: DateTime<Utc>,
    /// Field bag
    #[serde(default, alias = "datos")]
    pub fields: Fields,
}

impl FormRecord {
    /// Create an empty record with a fresh id, stamped now
    pub fn new() -> Self {
        Self::with_timestamp(Utc::now())
    }

    /// Create an empty record with a fresh id and the given creation time
    pub fn with_timestamp(submitted_at: DateTime<Utc>) -> Self {
        FormRecord {
            id: FormId::new(),
            submitted_at,
            fields: Fields::new(),
        }
    }

    /// Builder-style field setter, used mostly by tests and fixtures
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Look up a field; `None` means unspecified
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Field rendered as text, or the empty string when unspecified
    pub fn text(&self, name: &str) -> String {
        self.get(name).map(FieldValue::display_text).unwrap_or_default()
    }

    /// Whether the field holds a truthy value
    pub fn is_set(&self, name: &str) -> bool {
        self.get(name).is_some_and(FieldValue::is_truthy)
    }

    /// Shallow merge: every key in `partial` overwrites, others are untouched
    pub fn merge_fields(&mut self, partial: Fields) {
        self.fields.extend(partial);
    }
}

impl Default for FormRecord {
    fn default() -> Self {
        Self::new()
    }
}
