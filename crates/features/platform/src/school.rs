use crate::package::{PackageSummary, decode_id, first_string};
use serde::Serialize;
use serde_json::Value;
use shub_normalize::normalize_date;

/// A school row as the platform listing renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolSummary {
    pub id: String,
    pub name: String,
    pub code: Option<String>,
    pub status: String,
    pub tenant_id: Option<String>,
    pub owner_name: Option<String>,
    pub owner_phone: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub package: Option<PackageSummary>,
    pub subscription_status: Option<String>,
}

impl SchoolSummary {
    /// Decodes a school payload.
    ///
    /// Owner and address fields prefer the embedded objects
    /// (`owner.name`, `address.country`, ...) and fall back to the flat
    /// legacy spellings; the embedded subscription contributes the package
    /// and its status when present.
    #[must_use]
    pub fn decode(payload: &Value) -> Self {
        let owner = payload.get("owner");
        let address = payload.get("address");
        let subscription = payload.get("subscription");

        Self {
            id: decode_id(payload, &["id", "schoolId"]),
            name: first_string(payload, &["name"]).unwrap_or_else(|| "Unnamed School".to_owned()),
            code: first_string(payload, &["code", "slug"]),
            status: first_string(payload, &["status"]).unwrap_or_else(|| "ACTIVE".to_owned()),
            tenant_id: first_string(payload, &["tenantId"]),
            owner_name: nested_or_flat(owner, "name", payload, "ownerName"),
            owner_phone: nested_or_flat(owner, "phone", payload, "ownerPhone"),
            country: nested_or_flat(address, "country", payload, "country"),
            state: nested_or_flat(address, "state", payload, "state"),
            city: nested_or_flat(address, "city", payload, "city"),
            created_at: payload.get("createdAt").and_then(normalize_date),
            updated_at: payload.get("updatedAt").and_then(normalize_date),
            package: subscription
                .and_then(|s| s.get("package"))
                .filter(|p| p.is_object())
                .map(PackageSummary::decode),
            subscription_status: subscription.and_then(|s| first_string(s, &["status"])),
        }
    }
}

fn nested_or_flat(
    nested: Option<&Value>,
    nested_field: &str,
    payload: &Value,
    flat_field: &str,
) -> Option<String> {
    nested
        .and_then(|n| first_string(n, &[nested_field]))
        .or_else(|| first_string(payload, &[flat_field]))
}
