use shub_domain::constants::TRUTHY_WORDS;
use shub_domain::features::{FeatureKind, FeatureValue};
use shub_domain::rows::RowValue;

/// Coerces an edited row value into a boolean.
///
/// Toggles are taken as-is; text is trimmed, lower-cased, and matched
/// against the truthy lexicon (`true`, `1`, `yes`, `y`, `on`, `enabled`).
/// Unrecognized text coerces to `false`; the falsy lexicon and garbage are
/// indistinguishable on the wire.
#[must_use]
pub fn coerce_boolean(value: &RowValue) -> bool {
    match value {
        RowValue::Toggle(b) => *b,
        RowValue::Text(s) => coerce_boolean_text(s),
    }
}

/// Text arm of [`coerce_boolean`].
#[must_use]
pub fn coerce_boolean_text(s: &str) -> bool {
    let normalized = s.trim().to_lowercase();
    TRUTHY_WORDS.contains(&normalized.as_str())
}

/// Renders a canonical feature value in the shape the editor binds to.
///
/// * `List`: items joined with `", "`; stray text passes through.
/// * `Number`: decimal string, empty for the unlimited state.
/// * `Boolean`: a toggle, coerced through the lexicon when the stored
///   value is not already a boolean.
/// * `Text`: the display string of whatever is stored.
#[must_use]
pub fn format_for_edit(value: &FeatureValue, kind: FeatureKind) -> RowValue {
    match kind {
        FeatureKind::Boolean => match value {
            FeatureValue::Bool(b) => RowValue::Toggle(*b),
            FeatureValue::Text(s) => RowValue::Toggle(coerce_boolean_text(s)),
            other => RowValue::Toggle(coerce_boolean_text(&other.to_string())),
        },
        FeatureKind::List => match value {
            FeatureValue::List(items) => RowValue::Text(items.join(", ")),
            FeatureValue::Text(s) => RowValue::Text(s.clone()),
            _ => RowValue::empty(),
        },
        FeatureKind::Number => match value {
            FeatureValue::Number(Some(n)) => RowValue::Text(n.to_string()),
            FeatureValue::Number(None) => RowValue::empty(),
            FeatureValue::Text(s) => RowValue::Text(s.clone()),
            _ => RowValue::empty(),
        },
        FeatureKind::Text => match value {
            FeatureValue::Number(None) => RowValue::empty(),
            other => RowValue::Text(other.to_string()),
        },
    }
}
