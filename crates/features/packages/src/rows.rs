use crate::coerce::{coerce_boolean, format_for_edit};
use crate::infer::detect_kind;
use fxhash::FxHashSet;
use shub_domain::constants::{MODULES_ENABLED, PRIORITY_FEATURE_KEYS};
use shub_domain::features::{FeatureBag, FeatureKind, FeatureValue, reserved_kind};
use shub_domain::rows::{FeatureRow, RowValue};

/// Projects a feature bag onto the ordered editor-row list.
///
/// Reserved keys come first in their fixed order, flagged `is_default`;
/// every other key follows in bag order. A completely empty bag still
/// yields one placeholder row per reserved key so the editor always shows
/// the schema. Row ids equal their keys, which keeps grid identity stable
/// across edits.
#[must_use]
pub fn bag_to_rows(bag: &FeatureBag) -> Vec<FeatureRow> {
    let mut rows = Vec::with_capacity(bag.len().max(PRIORITY_FEATURE_KEYS.len()));
    let mut seen = FxHashSet::default();

    for key in PRIORITY_FEATURE_KEYS {
        if let Some(value) = bag.get(key) {
            rows.push(make_row(key, Some(value), true));
            seen.insert(*key);
        }
    }

    for (key, value) in bag.iter() {
        if !seen.contains(key) {
            rows.push(make_row(key, Some(value), false));
        }
    }

    if rows.is_empty() {
        rows.extend(PRIORITY_FEATURE_KEYS.iter().map(|key| make_row(key, None, true)));
    }

    rows
}

/// Folds edited rows back into a feature bag.
///
/// Rows with a blank key are dropped. Values are parsed per the row's kind:
/// booleans through the lexicon, numbers to a finite value or the unlimited
/// state, lists split on commas with empties discarded, text verbatim. The
/// module list is reinstated as an empty list if the edit removed it.
#[must_use]
pub fn rows_to_bag(rows: &[FeatureRow]) -> FeatureBag {
    let mut bag = FeatureBag::with_capacity(rows.len());

    for row in rows {
        let key = row.key.trim();
        if key.is_empty() {
            continue;
        }
        bag.insert(key, parse_row_value(row));
    }

    let modules_ok = bag.get(MODULES_ENABLED).is_some_and(FeatureValue::is_list);
    if !modules_ok {
        bag.insert(MODULES_ENABLED, FeatureValue::List(Vec::new()));
    }

    bag
}

fn make_row(key: &str, value: Option<&FeatureValue>, is_default: bool) -> FeatureRow {
    let detected = value.map_or(FeatureKind::Text, detect_kind);
    // Reserved keys know their kind; inference only overrides it when the
    // stored value is unambiguously something else.
    let kind = if detected == FeatureKind::Text {
        reserved_kind(key).unwrap_or(detected)
    } else {
        detected
    };

    let rendered = match value {
        Some(value) => format_for_edit(value, kind),
        None if kind == FeatureKind::Boolean => RowValue::Toggle(false),
        None => RowValue::empty(),
    };

    let row = FeatureRow::new(key, kind, rendered);
    if is_default { row.default_row() } else { row }
}

fn parse_row_value(row: &FeatureRow) -> FeatureValue {
    match row.kind {
        FeatureKind::Boolean => FeatureValue::Bool(coerce_boolean(&row.value)),
        FeatureKind::Number => {
            let parsed = row
                .value
                .as_text()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .and_then(|s| s.parse::<f64>().ok())
                .filter(|n| n.is_finite());
            FeatureValue::Number(parsed)
        }
        FeatureKind::List => {
            let raw = row.value.as_text().unwrap_or_default();
            let items = raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect();
            FeatureValue::List(items)
        }
        FeatureKind::Text => match &row.value {
            RowValue::Text(s) => FeatureValue::Text(s.clone()),
            RowValue::Toggle(b) => FeatureValue::Text(b.to_string()),
        },
    }
}
