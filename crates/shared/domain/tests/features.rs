use serde_json::json;
use shub_domain::features::{FeatureBag, FeatureKind, FeatureValue};
use shub_domain::rows::{FeatureRow, RowValue, humanize_key};

#[test]
fn feature_values_serialize_to_their_natural_json_forms() {
    assert_eq!(serde_json::to_value(FeatureValue::Bool(true)).unwrap(), json!(true));
    assert_eq!(serde_json::to_value(FeatureValue::Number(Some(5.0))).unwrap(), json!(5.0));
    assert_eq!(serde_json::to_value(FeatureValue::unlimited()).unwrap(), json!(null));
    assert_eq!(
        serde_json::to_value(FeatureValue::List(vec!["a".into(), "b".into()])).unwrap(),
        json!(["a", "b"])
    );
    assert_eq!(serde_json::to_value(FeatureValue::from("hi")).unwrap(), json!("hi"));
}

#[test]
fn feature_values_deserialize_from_well_formed_json() {
    let value: FeatureValue = serde_json::from_value(json!(null)).unwrap();
    assert_eq!(value, FeatureValue::unlimited());

    let value: FeatureValue = serde_json::from_value(json!(["x", "y"])).unwrap();
    assert_eq!(value.as_list(), Some(&["x".to_owned(), "y".to_owned()][..]));

    let value: FeatureValue = serde_json::from_value(json!("500")).unwrap();
    assert_eq!(value, FeatureValue::Text("500".into()));
}

#[test]
fn feature_values_deserialize_leniently_from_odd_shapes() {
    // Mixed arrays keep only their string elements instead of erroring.
    let value: FeatureValue = serde_json::from_value(json!(["a", 1, "b", null])).unwrap();
    assert_eq!(value.as_list(), Some(&["a".to_owned(), "b".to_owned()][..]));

    // Objects classify as their compact JSON text.
    let value: FeatureValue = serde_json::from_value(json!({"tier": "gold"})).unwrap();
    assert_eq!(value, FeatureValue::Text(r#"{"tier":"gold"}"#.into()));

    // The classifier entry point agrees with the serde surface.
    assert_eq!(FeatureValue::from_json(&json!([2, "x"])), FeatureValue::List(vec!["x".into()]));
}

#[test]
fn bags_deserialize_payloads_the_normalizer_accepts() {
    let bag: FeatureBag = serde_json::from_value(json!({
        "modules_enabled": ["exams", 7, "fees"],
        "raw_blob": {"a": 1},
        "max_students": 500,
    }))
    .unwrap();

    assert_eq!(
        bag.get("modules_enabled"),
        Some(&FeatureValue::List(vec!["exams".into(), "fees".into()]))
    );
    assert_eq!(bag.get("raw_blob"), Some(&FeatureValue::Text(r#"{"a":1}"#.into())));
    assert_eq!(bag.get("max_students"), Some(&FeatureValue::from(500.0)));
}

#[test]
fn bag_preserves_insertion_order() {
    let mut bag = FeatureBag::new();
    bag.insert("zeta", FeatureValue::Bool(true));
    bag.insert("alpha", FeatureValue::from(1.0));
    bag.insert("zeta", FeatureValue::Bool(false));

    let keys: Vec<&str> = bag.keys().collect();
    assert_eq!(keys, vec!["zeta", "alpha"]);
    assert_eq!(bag.get("zeta"), Some(&FeatureValue::Bool(false)));
}

#[test]
fn bag_round_trips_through_json() {
    let mut bag = FeatureBag::new();
    bag.insert("modules_enabled", FeatureValue::List(vec!["exams".into()]));
    bag.insert("max_students", FeatureValue::from(500.0));
    bag.insert("notes", FeatureValue::from("vip tenant"));

    let encoded = serde_json::to_string(&bag).unwrap();
    let decoded: FeatureBag = serde_json::from_str(&encoded).unwrap();
    assert_eq!(decoded, bag);
}

#[test]
fn kind_names_match_the_wire_contract() {
    assert_eq!(FeatureKind::Number.to_string(), "number");
    assert_eq!(FeatureKind::List.as_ref(), "list");
    assert_eq!("boolean".parse::<FeatureKind>().unwrap(), FeatureKind::Boolean);
    assert_eq!(serde_json::to_value(FeatureKind::Text).unwrap(), json!("text"));
}

#[test]
fn rows_serialize_camel_case() {
    let row = FeatureRow::new("max_staff", FeatureKind::Number, RowValue::from("10")).default_row();
    let encoded = serde_json::to_value(&row).unwrap();
    assert_eq!(encoded["isDefault"], json!(true));
    assert_eq!(encoded["value"], json!("10"));
    assert_eq!(row.id, "max_staff");
}

#[test]
fn humanize_key_labels() {
    assert_eq!(humanize_key("max_storage_gb"), "Max Storage Gb");
    assert_eq!(humanize_key("modules_enabled"), "Modules Enabled");
    assert_eq!(humanize_key(""), "New feature");
    assert_eq!(humanize_key("already  spaced"), "Already Spaced");
}
