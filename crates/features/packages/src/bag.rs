use serde_json::Value;
use shub_domain::constants::{MODULES_ENABLED, PRIORITY_FEATURE_KEYS};
use shub_domain::features::{FeatureBag, FeatureValue};

/// The canonical base bag: every reserved key present, `modules_enabled`
/// empty, every `max_*` limit unset.
///
/// A fresh bag is built per call; callers may mutate their copy freely.
#[must_use]
pub fn build_defaults() -> FeatureBag {
    let mut bag = FeatureBag::with_capacity(PRIORITY_FEATURE_KEYS.len());
    for key in PRIORITY_FEATURE_KEYS {
        if *key == MODULES_ENABLED {
            bag.insert(*key, FeatureValue::List(Vec::new()));
        } else {
            bag.insert(*key, FeatureValue::unlimited());
        }
    }
    bag
}

/// Normalizes an arbitrary package-features payload into a complete bag.
///
/// Accepted input shapes:
/// * absent / `null`: the defaults;
/// * a JSON-encoded string: parsed, then normalized; a malformed string
///   logs a warning and yields the defaults (never an error);
/// * an object: defaults overlaid with the payload's entries;
/// * anything else (arrays included): the defaults.
///
/// Post-conditions: all seven reserved keys are present and
/// `modules_enabled` is a list, whatever the caller sent.
#[must_use]
pub fn normalize_feature_bag(input: Option<&Value>) -> FeatureBag {
    match input {
        None | Some(Value::Null) => build_defaults(),
        Some(Value::String(raw)) => match serde_json::from_str::<Value>(raw) {
            Ok(parsed) => normalize_payload(&parsed),
            Err(error) => {
                tracing::warn!(%error, "failed to parse package features string; using defaults");
                build_defaults()
            }
        },
        Some(payload) => normalize_payload(payload),
    }
}

/// Re-normalizes a bag for transmission.
///
/// Idempotent over [`normalize_feature_bag`] output; as a last line of
/// defense the module list is forced back to an empty list if it is not a
/// list at this point.
#[must_use]
pub fn serialize_feature_bag(bag: &FeatureBag) -> FeatureBag {
    let mut serialized = serde_json::to_value(bag)
        .map_or_else(|_| build_defaults(), |payload| normalize_feature_bag(Some(&payload)));

    let modules_ok = serialized.get(MODULES_ENABLED).is_some_and(FeatureValue::is_list);
    if !modules_ok {
        serialized.insert(MODULES_ENABLED, FeatureValue::List(Vec::new()));
    }
    serialized
}

fn normalize_payload(payload: &Value) -> FeatureBag {
    let Value::Object(entries) = payload else {
        return build_defaults();
    };

    let mut bag = build_defaults();
    for (key, value) in entries {
        if key == MODULES_ENABLED {
            // Only a real array may override the default empty module list.
            if value.is_array() {
                bag.insert(key.clone(), FeatureValue::from_json(value));
            }
            continue;
        }
        bag.insert(key.clone(), FeatureValue::from_json(value));
    }
    bag
}
