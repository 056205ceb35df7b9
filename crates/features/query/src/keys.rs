use core::fmt;
use serde_json::Value;

/// One step of a hierarchical query key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A fixed family name, `"list"`, `"detail"`, `"analytics"`.
    Literal(&'static str),
    /// A runtime value such as an entity id.
    Dynamic(String),
    /// A canonicalized filter set.
    Filters(String),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(s) => f.write_str(s),
            Self::Dynamic(s) | Self::Filters(s) => f.write_str(s),
        }
    }
}

/// The identity of one server-state query.
///
/// Keys are ordered segment lists; a key identifies a query family prefix
/// as well as a concrete query, so `platform/packages` is a prefix of
/// `platform/packages/list/{...}` and invalidating the former sweeps the
/// latter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey(Vec<Segment>);

impl QueryKey {
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Whether `prefix` names this key or one of its ancestors.
    #[must_use]
    pub fn starts_with(&self, prefix: &Self) -> bool {
        self.0.len() >= prefix.0.len() && self.0[..prefix.0.len()] == prefix.0[..]
    }
}

impl fmt::Display for QueryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, segment) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str("/")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Builder for [`QueryKey`]s rooted at a feature scope.
///
/// The convenience constructors mirror the key families the client uses
/// everywhere: a bare `lists()` prefix for invalidation, `list(filters)`
/// for a filtered listing, `detail(id)` for a single entity, and
/// `analytics(area, filters)` for the analytics family.
#[derive(Debug, Clone)]
pub struct QueryScope {
    segments: Vec<Segment>,
}

impl QueryScope {
    #[must_use]
    pub fn scope(root: &'static str) -> Self {
        Self { segments: vec![Segment::Literal(root)] }
    }

    #[must_use]
    pub fn segment(mut self, name: &'static str) -> Self {
        self.segments.push(Segment::Literal(name));
        self
    }

    #[must_use]
    pub fn dynamic(mut self, value: impl Into<String>) -> Self {
        self.segments.push(Segment::Dynamic(value.into()));
        self
    }

    /// Appends the canonical form of a filter set. Empty or non-object
    /// filters add no segment, so an unfiltered `list(&json!({}))` and
    /// a bare `lists()` key coincide.
    #[must_use]
    pub fn filters(mut self, filters: &Value) -> Self {
        if let Some(canonical) = canonical_filters(filters) {
            self.segments.push(Segment::Filters(canonical));
        }
        self
    }

    #[must_use]
    pub fn key(self) -> QueryKey {
        QueryKey(self.segments)
    }

    #[must_use]
    pub fn lists(self) -> QueryKey {
        self.segment("list").key()
    }

    #[must_use]
    pub fn list(self, filters: &Value) -> QueryKey {
        self.segment("list").filters(filters).key()
    }

    #[must_use]
    pub fn detail(self, id: impl Into<String>) -> QueryKey {
        self.segment("detail").dynamic(id).key()
    }

    #[must_use]
    pub fn analytics(self, area: &'static str, filters: &Value) -> QueryKey {
        self.segment("analytics").segment(area).filters(filters).key()
    }
}

/// Canonicalizes a filter object into a stable string.
///
/// Null, empty-string, empty-array, and empty-object values are dropped
/// recursively, then the remainder is serialized with serde_json's
/// sorted-key object representation. Returns `None` when nothing
/// survives, including for non-object input.
fn canonical_filters(filters: &Value) -> Option<String> {
    match prune(filters) {
        Some(Value::Object(map)) if !map.is_empty() => {
            serde_json::to_string(&Value::Object(map)).ok()
        }
        _ => None,
    }
}

fn prune(value: &Value) -> Option<Value> {
    match value {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::Array(items) => {
            let kept: Vec<Value> = items.iter().filter_map(prune).collect();
            (!kept.is_empty()).then(|| Value::Array(kept))
        }
        Value::Object(map) => {
            let mut kept: serde_json::Map<String, Value> = map
                .iter()
                .filter_map(|(k, v)| prune(v).map(|v| (k.clone(), v)))
                .collect();
            // serde_json is built with `preserve_order`, so the sorted
            // canonical form must be imposed here rather than inherited
            // from the map representation.
            kept.sort_keys();
            (!kept.is_empty()).then(|| Value::Object(kept))
        }
        other => Some(other.clone()),
    }
}
