//! Editable row view of a feature bag.
//!
//! Rows are what the package-editor grid binds to: one row per key, with
//! the value held in its in-progress edited form (free text or a toggle)
//! rather than the canonical [`FeatureValue`](crate::features::FeatureValue).

use crate::features::FeatureKind;
use serde::{Deserialize, Serialize};

/// The in-progress edited representation of a row value.
///
/// Boolean rows render as a toggle; every other kind renders as text that
/// is only parsed back on submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowValue {
    Toggle(bool),
    Text(String),
}

impl RowValue {
    /// Empty text, the placeholder for a synthesized row.
    #[must_use]
    pub const fn empty() -> Self {
        Self::Text(String::new())
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Toggle(_) => None,
        }
    }
}

impl From<bool> for RowValue {
    fn from(value: bool) -> Self {
        Self::Toggle(value)
    }
}

impl From<String> for RowValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for RowValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// One editable feature entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRow {
    /// Stable identity for the grid; equals the key for keyed rows.
    pub id: String,
    pub key: String,
    pub kind: FeatureKind,
    pub value: RowValue,
    /// `true` for rows backing the reserved schema keys.
    pub is_default: bool,
}

impl FeatureRow {
    #[must_use]
    pub fn new(key: impl Into<String>, kind: FeatureKind, value: RowValue) -> Self {
        let key = key.into();
        Self { id: key.clone(), key, kind, value, is_default: false }
    }

    /// Marks this row as part of the reserved schema.
    #[must_use]
    pub fn default_row(mut self) -> Self {
        self.is_default = true;
        self
    }

    /// Human-readable label for the key (`max_storage_gb` → `Max Storage Gb`).
    #[must_use]
    pub fn label(&self) -> String {
        humanize_key(&self.key)
    }
}

/// Turns a snake_case feature key into a display label.
///
/// Empty keys label as "New feature", matching the editor's placeholder row.
#[must_use]
pub fn humanize_key(key: &str) -> String {
    if key.trim().is_empty() {
        return "New feature".to_owned();
    }

    let mut label = String::with_capacity(key.len());
    let mut at_word_start = true;
    for ch in key.chars() {
        if ch == '_' || ch.is_whitespace() {
            if !label.ends_with(' ') && !label.is_empty() {
                label.push(' ');
            }
            at_word_start = true;
        } else if at_word_start {
            label.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            label.push(ch);
        }
    }
    label.trim_end().to_owned()
}
