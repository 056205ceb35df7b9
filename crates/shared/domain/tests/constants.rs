use shub_domain::constants::{
    BOOLEAN_WORDS, FALSY_WORDS, MODULES_ENABLED, PRIORITY_FEATURE_KEYS, TRUTHY_WORDS,
};
use shub_domain::features::{FeatureKind, reserved_kind};

#[test]
fn priority_keys_keep_their_fixed_order() {
    assert_eq!(
        PRIORITY_FEATURE_KEYS,
        &[
            "modules_enabled",
            "max_staff",
            "max_schools",
            "max_students",
            "max_teachers",
            "max_storage_gb",
            "max_branches_per_school",
        ]
    );
}

#[test]
fn reserved_kinds_match_the_schema_contract() {
    assert_eq!(reserved_kind(MODULES_ENABLED), Some(FeatureKind::List));
    for key in PRIORITY_FEATURE_KEYS.iter().filter(|k| **k != MODULES_ENABLED) {
        assert_eq!(reserved_kind(key), Some(FeatureKind::Number), "{key}");
    }
    assert_eq!(reserved_kind("custom_flag"), None);
}

#[test]
fn lexicons_are_disjoint_and_lowercase() {
    for word in TRUTHY_WORDS.iter().chain(FALSY_WORDS) {
        assert_eq!(*word, word.to_lowercase());
        assert!(!(TRUTHY_WORDS.contains(word) && FALSY_WORDS.contains(word)));
    }
    // The classification lexicon is the coercion lexicon minus digits and
    // single letters.
    for word in BOOLEAN_WORDS {
        assert!(TRUTHY_WORDS.contains(word) || FALSY_WORDS.contains(word));
    }
    assert!(!BOOLEAN_WORDS.contains(&"1"));
    assert!(!BOOLEAN_WORDS.contains(&"y"));
}
