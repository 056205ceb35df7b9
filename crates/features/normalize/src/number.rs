use serde_json::Value;

/// Folds a loosely-encoded numeric field into a finite `f64`.
///
/// Accepted encodings, in precedence order:
/// 1. a finite JSON number;
/// 2. a string that fully parses as a finite number;
/// 3. an object whose `"d"` field is an array (the wire shape of
///    arbitrary-precision decimals) where the first element is itself a
///    number or numeric string.
///
/// Anything else, including `NaN`/infinite parses, yields `fallback`.
#[must_use]
pub fn normalize_number(value: &Value, fallback: f64) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()).unwrap_or(fallback),
        Value::String(s) => parse_finite(s).unwrap_or(fallback),
        Value::Object(map) => match map.get("d") {
            Some(Value::Array(digits)) => digits
                .first()
                .and_then(|first| match first {
                    Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
                    Value::String(s) => parse_finite(s),
                    _ => None,
                })
                .unwrap_or(fallback),
            _ => fallback,
        },
        _ => fallback,
    }
}

/// [`normalize_number`] for count-like fields.
///
/// Negative and fractional results take the fallback path; counts on this
/// wire are whole and non-negative or garbage.
#[must_use]
pub fn normalize_u64(value: &Value, fallback: u64) -> u64 {
    let n = normalize_number(value, -1.0);
    if n >= 0.0 && n.fract() == 0.0 && n <= u64::MAX as f64 {
        n as u64
    } else {
        fallback
    }
}

/// Extracts a non-empty trimmed string, or `None`.
#[must_use]
pub fn normalize_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
        }
        _ => None,
    }
}

fn parse_finite(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|f| f.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_pass_through() {
        assert_eq!(normalize_number(&json!(42.5), 0.0), 42.5);
        assert_eq!(normalize_number(&json!(-3), 0.0), -3.0);
    }

    #[test]
    fn numeric_strings_parse_and_empty_strings_fall_back() {
        assert_eq!(normalize_number(&json!("42.5"), 0.0), 42.5);
        assert_eq!(normalize_number(&json!("  7 "), 0.0), 7.0);
        assert_eq!(normalize_number(&json!(""), 0.0), 0.0);
        assert_eq!(normalize_number(&json!("12abc"), 9.0), 9.0);
    }

    #[test]
    fn decimal_wrappers_take_their_first_digit_group() {
        assert_eq!(normalize_number(&json!({"d": [7]}), 0.0), 7.0);
        assert_eq!(normalize_number(&json!({"d": ["19.99", 4]}), 0.0), 19.99);
        assert_eq!(normalize_number(&json!({"d": []}), 5.0), 5.0);
        assert_eq!(normalize_number(&json!({"d": "7"}), 5.0), 5.0);
        assert_eq!(normalize_number(&json!({"e": [7]}), 5.0), 5.0);
    }

    #[test]
    fn everything_else_falls_back() {
        assert_eq!(normalize_number(&json!(null), 1.5), 1.5);
        assert_eq!(normalize_number(&json!(true), 1.5), 1.5);
        assert_eq!(normalize_number(&json!([42]), 1.5), 1.5);
    }

    #[test]
    fn u64_rejects_negatives_and_fractions() {
        assert_eq!(normalize_u64(&json!("120"), 0), 120);
        assert_eq!(normalize_u64(&json!(-2), 1), 1);
        assert_eq!(normalize_u64(&json!(2.5), 1), 1);
        assert_eq!(normalize_u64(&json!(null), 3), 3);
    }
}
