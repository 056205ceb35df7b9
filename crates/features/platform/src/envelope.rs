use serde_json::Value;
use shub_domain::paging::Page;
use shub_normalize::normalize_u64;

/// Page size assumed when the envelope does not carry one.
pub const DEFAULT_PAGE_LIMIT: u64 = 25;

/// Metadata containers probed for pagination fields, most recent backend
/// generation first.
const META_PATHS: &[&[&str]] = &[&["pagination"], &["meta"], &["data", "pagination"], &["data", "meta"]];

/// Unwraps the ubiquitous `{ "data": ... }` response envelope, when present.
#[must_use]
pub fn extract_data(payload: &Value) -> &Value {
    match payload.get("data") {
        Some(inner) => inner,
        None => payload,
    }
}

/// Reconciles any of the known paginated-envelope shapes into a [`Page`].
///
/// The row array is taken from `payload.data` when that is an array, from
/// `payload` itself when the payload is a bare array, and is empty
/// otherwise. Pagination metadata comes from the first non-empty container
/// among `pagination`, `meta`, `data.pagination`, `data.meta`; a malformed
/// container in that slot still claims the probe and supplies no fields.
/// Missing fields default safely: `total` to the row count, `page` to 1, `limit`
/// to `fallback_limit`, and `total_pages` (spelled `pages` or `totalPages`
/// on the wire) to 1. Metadata values may themselves be numeric strings or
/// decimal wrappers.
///
/// `decode_row` turns each raw row into a `T`; rows it rejects are dropped.
#[must_use]
pub fn reconcile_page<T>(
    payload: &Value,
    fallback_limit: u64,
    decode_row: impl Fn(&Value) -> Option<T>,
) -> Page<T> {
    let rows: &[Value] = match payload.get("data") {
        Some(Value::Array(items)) => items,
        _ => match payload {
            Value::Array(items) => items,
            _ => &[],
        },
    };

    let meta = resolve_meta(payload);
    let data: Vec<T> = rows.iter().filter_map(&decode_row).collect();
    let row_count = data.len() as u64;

    let total = meta.map_or(row_count, |m| normalize_u64(field(m, "total"), row_count));
    let page = meta.map_or(1, |m| normalize_u64(field(m, "page"), 1)).max(1);
    let limit = meta.map_or(fallback_limit, |m| normalize_u64(field(m, "limit"), fallback_limit));
    let total_pages = meta
        .map_or(1, |m| {
            let pages = field(m, "pages");
            let spelled_out = if pages.is_null() { field(m, "totalPages") } else { pages };
            normalize_u64(spelled_out, 1)
        })
        .max(1);

    Page { data, total, page, limit, total_pages }
}

fn resolve_meta(payload: &Value) -> Option<&Value> {
    META_PATHS
        .iter()
        .find_map(|path| {
            let mut cursor = payload;
            for segment in *path {
                cursor = cursor.get(segment)?;
            }
            truthy(cursor).then_some(cursor)
        })
        .filter(|meta| meta.is_object())
}

// Mirrors script-style truthiness so a garbage container in an early slot
// still claims the probe and defaults every field.
fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn field<'a>(meta: &'a Value, name: &str) -> &'a Value {
    meta.get(name).unwrap_or(&Value::Null)
}
