use serde_json::json;
use shub_domain::constants::PRIORITY_FEATURE_KEYS;
use shub_domain::features::{FeatureBag, FeatureKind, FeatureValue};
use shub_domain::rows::{FeatureRow, RowValue};
use shub_packages::{bag_to_rows, normalize_feature_bag, rows_to_bag};

#[test]
fn reserved_rows_come_first_in_fixed_order() {
    let payload = json!({
        "custom_flag": true,
        "max_students": 120,
        "modules_enabled": ["exams"],
    });
    let rows = bag_to_rows(&normalize_feature_bag(Some(&payload)));

    let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(&keys[..7], PRIORITY_FEATURE_KEYS);
    assert_eq!(keys[7], "custom_flag");

    assert!(rows[..7].iter().all(|r| r.is_default));
    assert!(!rows[7].is_default);
}

#[test]
fn reserved_kinds_win_over_text_detection() {
    let payload = json!({"max_students": null, "modules_enabled": []});
    let rows = bag_to_rows(&normalize_feature_bag(Some(&payload)));

    let modules = rows.iter().find(|r| r.key == "modules_enabled").unwrap();
    assert_eq!(modules.kind, FeatureKind::List);
    assert_eq!(modules.value, RowValue::Text(String::new()));

    let students = rows.iter().find(|r| r.key == "max_students").unwrap();
    assert_eq!(students.kind, FeatureKind::Number);
    assert_eq!(students.value, RowValue::Text(String::new()));
}

#[test]
fn detected_kinds_drive_row_rendering() {
    let payload = json!({
        "modules_enabled": ["exams", "fees"],
        "max_students": 250,
        "priority_support": "Enabled",
        "notes": "call the owner",
    });
    let rows = bag_to_rows(&normalize_feature_bag(Some(&payload)));
    let by_key = |key: &str| rows.iter().find(|r| r.key == key).unwrap();

    assert_eq!(by_key("modules_enabled").value, RowValue::Text("exams, fees".into()));
    assert_eq!(by_key("max_students").value, RowValue::Text("250".into()));
    assert_eq!(by_key("priority_support").kind, FeatureKind::Boolean);
    assert_eq!(by_key("priority_support").value, RowValue::Toggle(true));
    assert_eq!(by_key("notes").kind, FeatureKind::Text);
    assert_eq!(by_key("notes").value, RowValue::Text("call the owner".into()));
}

#[test]
fn empty_bag_synthesizes_the_reserved_schema() {
    let rows = bag_to_rows(&FeatureBag::new());
    assert_eq!(rows.len(), PRIORITY_FEATURE_KEYS.len());
    assert!(rows.iter().all(|r| r.is_default));
    let modules = &rows[0];
    assert_eq!(modules.key, "modules_enabled");
    assert_eq!(modules.kind, FeatureKind::List);
}

#[test]
fn rows_fold_back_by_kind() {
    let rows = vec![
        FeatureRow::new("modules_enabled", FeatureKind::List, "exams, fees, , attendance".into()),
        FeatureRow::new("max_students", FeatureKind::Number, "250".into()),
        FeatureRow::new("max_staff", FeatureKind::Number, "".into()),
        FeatureRow::new("priority_support", FeatureKind::Boolean, "yes".into()),
        FeatureRow::new("strict_mode", FeatureKind::Boolean, RowValue::Toggle(false)),
        FeatureRow::new("notes", FeatureKind::Text, "vip".into()),
        FeatureRow::new("  ", FeatureKind::Text, "dropped".into()),
    ];
    let bag = rows_to_bag(&rows);

    assert_eq!(
        bag.get("modules_enabled"),
        Some(&FeatureValue::List(vec!["exams".into(), "fees".into(), "attendance".into()]))
    );
    assert_eq!(bag.get("max_students"), Some(&FeatureValue::from(250.0)));
    assert_eq!(bag.get("max_staff"), Some(&FeatureValue::unlimited()));
    assert_eq!(bag.get("priority_support"), Some(&FeatureValue::Bool(true)));
    assert_eq!(bag.get("strict_mode"), Some(&FeatureValue::Bool(false)));
    assert_eq!(bag.get("notes"), Some(&FeatureValue::from("vip")));
    assert_eq!(bag.len(), 6);
}

#[test]
fn invalid_number_rows_become_unlimited() {
    let rows =
        vec![FeatureRow::new("max_students", FeatureKind::Number, "not a number".into())];
    let bag = rows_to_bag(&rows);
    assert_eq!(bag.get("max_students"), Some(&FeatureValue::unlimited()));
}

#[test]
fn module_list_is_reinstated_when_missing() {
    let rows = vec![FeatureRow::new("notes", FeatureKind::Text, "x".into())];
    let bag = rows_to_bag(&rows);
    assert_eq!(bag.get("modules_enabled"), Some(&FeatureValue::List(Vec::new())));
}

#[test]
fn normalized_bags_round_trip_through_rows() {
    let payload = json!({
        "modules_enabled": ["exams", "fees"],
        "max_students": 500,
        "max_staff": null,
        "priority_support": true,
        "custom_limit": 9,
        "notes": "keep an eye on storage",
    });
    let bag = normalize_feature_bag(Some(&payload));
    let round = rows_to_bag(&bag_to_rows(&bag));
    assert_eq!(round, bag);
}
