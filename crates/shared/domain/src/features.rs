//! The package feature bag: an open-ended map of entitlement keys to
//! loosely-typed values, plus the closed set of value kinds the editor
//! understands.

use crate::constants::{MODULES_ENABLED, PRIORITY_FEATURE_KEYS};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// The four value shapes a feature entry can take in the editor.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FeatureKind {
    Number,
    Boolean,
    Text,
    List,
}

/// Returns the kind a reserved key is expected to hold, if `key` is reserved.
///
/// `modules_enabled` is a list; every `max_*` limit is a number.
#[must_use]
pub fn reserved_kind(key: &str) -> Option<FeatureKind> {
    if key == MODULES_ENABLED {
        Some(FeatureKind::List)
    } else if PRIORITY_FEATURE_KEYS.contains(&key) {
        Some(FeatureKind::Number)
    } else {
        None
    }
}

/// A single feature value.
///
/// Serialization is transparent: each variant maps to its natural JSON form
/// (`Bool` → boolean, `Number` → number or `null`, `List` → string array,
/// `Text` → string). `Number(None)` means "unlimited / not set" and is a
/// legitimate state, not an error.
///
/// Deserialization is lenient and total over JSON: any value classifies
/// via [`FeatureValue::from_json`] rather than erroring.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Bool(bool),
    Number(Option<f64>),
    List(Vec<String>),
    Text(String),
}

impl FeatureValue {
    /// An unset numeric limit.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self::Number(None)
    }

    /// Classifies a raw JSON value into its typed form.
    ///
    /// Arrays keep only their string elements; an object has no editable
    /// shape, so its compact JSON text is kept rather than dropping the
    /// entry. Total: every JSON value maps to exactly one variant.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Bool(b) => Self::Bool(*b),
            Value::Number(n) => Self::Number(n.as_f64()),
            Value::Null => Self::unlimited(),
            Value::Array(items) => Self::List(
                items.iter().filter_map(|item| item.as_str().map(str::to_owned)).collect(),
            ),
            Value::String(s) => Self::Text(s.clone()),
            Value::Object(_) => Self::Text(serde_json::to_string(value).unwrap_or_default()),
        }
    }

    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// The numeric payload, when this is a set number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => *n,
            _ => None,
        }
    }

    /// The list payload, when this is a list.
    #[must_use]
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        Self::Number(Some(value))
    }
}

impl From<Vec<String>> for FeatureValue {
    fn from(items: Vec<String>) -> Self {
        Self::List(items)
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl<'de> Deserialize<'de> for FeatureValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json(&value))
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(Some(n)) => write!(f, "{n}"),
            Self::Number(None) => Ok(()),
            Self::List(items) => write!(f, "{}", items.join(", ")),
            Self::Text(s) => write!(f, "{s}"),
        }
    }
}

/// The feature bag of a package: key → value, insertion-ordered.
///
/// Order is preserved so that custom keys keep their position across the
/// bag → editor rows → bag round trip. The canonical form (as produced by
/// normalization) always contains the seven reserved keys and keeps
/// `modules_enabled` a list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureBag(IndexMap<String, FeatureValue>);

impl FeatureBag {
    #[must_use]
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(IndexMap::with_capacity(capacity))
    }

    /// Inserts a value, keeping the key's original position if it exists.
    pub fn insert(&mut self, key: impl Into<String>, value: FeatureValue) -> Option<FeatureValue> {
        self.0.insert(key.into(), value)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FeatureValue> {
        self.0.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl FromIterator<(String, FeatureValue)> for FeatureBag {
    fn from_iter<I: IntoIterator<Item = (String, FeatureValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for FeatureBag {
    type Item = (String, FeatureValue);
    type IntoIter = indexmap::map::IntoIter<String, FeatureValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FeatureBag {
    type Item = (&'a String, &'a FeatureValue);
    type IntoIter = indexmap::map::Iter<'a, String, FeatureValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
