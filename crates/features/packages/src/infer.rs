use serde_json::Value;
use shub_domain::constants::BOOLEAN_WORDS;
use shub_domain::features::{FeatureKind, FeatureValue};

/// Classifies a feature value into the kind the editor should use.
///
/// Structured variants map directly; free text is inspected: a boolean
/// lexicon word is `Boolean`, a non-empty fully-numeric string is `Number`,
/// everything else is `Text`. The empty string is `Text`; a blank input is
/// not the number zero.
#[must_use]
pub fn detect_kind(value: &FeatureValue) -> FeatureKind {
    match value {
        FeatureValue::List(_) => FeatureKind::List,
        FeatureValue::Bool(_) => FeatureKind::Boolean,
        FeatureValue::Number(_) => FeatureKind::Number,
        FeatureValue::Text(s) => classify_text(s),
    }
}

/// [`detect_kind`] for raw JSON, before a value is typed.
///
/// `null` counts as `Number` (the "unlimited" limit state); objects have no
/// editable shape and fall back to `Text`.
#[must_use]
pub fn detect_kind_json(value: &Value) -> FeatureKind {
    match value {
        Value::Array(_) => FeatureKind::List,
        Value::Bool(_) => FeatureKind::Boolean,
        Value::Number(_) | Value::Null => FeatureKind::Number,
        Value::String(s) => classify_text(s),
        Value::Object(_) => FeatureKind::Text,
    }
}

fn classify_text(s: &str) -> FeatureKind {
    let normalized = s.trim().to_lowercase();
    if BOOLEAN_WORDS.contains(&normalized.as_str()) {
        return FeatureKind::Boolean;
    }
    // Guard against `Number("") == 0`: an empty string is text, not zero.
    if !normalized.is_empty() && normalized.parse::<f64>().is_ok_and(f64::is_finite) {
        return FeatureKind::Number;
    }
    FeatureKind::Text
}
