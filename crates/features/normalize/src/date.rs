use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Nested fields probed, in order, when a date arrives wrapped in an object
/// (single-field wrappers and `{ start, end }` ranges both occur).
const DATE_FIELDS: &[&str] = &["date", "start", "end", "value"];

/// Folds a loosely-encoded date field into a canonical RFC 3339 UTC string.
///
/// Strings are accepted as RFC 3339 / ISO-8601 timestamps, the naive
/// `YYYY-MM-DDTHH:MM:SS` form, or a bare `YYYY-MM-DD` (pinned to midnight
/// UTC). Objects are probed recursively through `date`, `start`, `end`,
/// `value`. Everything else is absent.
///
/// Absence means "unknown", not an error, and is distinct from any real
/// instant; no epoch-zero placeholders.
#[must_use]
pub fn normalize_date(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => parse_instant(s).map(|dt| dt.to_rfc3339()),
        Value::Object(map) => DATE_FIELDS
            .iter()
            .filter_map(|field| map.get(*field))
            .find(|candidate| !candidate.is_null())
            .and_then(normalize_date),
        _ => None,
    }
}

fn parse_instant(s: &str) -> Option<DateTime<Utc>> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = trimmed.parse::<NaiveDateTime>() {
        return Some(naive.and_utc());
    }
    if let Ok(date) = trimmed.parse::<NaiveDate>() {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}
