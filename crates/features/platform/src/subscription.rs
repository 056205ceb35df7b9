use crate::package::{PackageSummary, decode_id, first_string, id_value};
use serde::Serialize;
use serde_json::Value;
use shub_normalize::normalize_date;

/// A subscription row for the platform listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSummary {
    pub id: String,
    pub status: String,
    pub school_id: String,
    pub package: Option<PackageSummary>,
    pub started_at: Option<String>,
    pub expires_at: Option<String>,
    pub renewed_at: Option<String>,
    pub auto_renew: bool,
}

impl SubscriptionSummary {
    /// Decodes a subscription payload.
    ///
    /// Date fields keep their historical spellings (`startDate` before
    /// `startedAt`, `endDate` before `expiresAt`); `autoRenew` also
    /// answers to snake_case.
    #[must_use]
    pub fn decode(payload: &Value) -> Self {
        // The flat schoolId wins over an embedded school object.
        let school_id = id_value(payload, "schoolId")
            .or_else(|| payload.get("school").and_then(|school| id_value(school, "id")))
            .unwrap_or_else(|| "unknown".to_owned());

        Self {
            id: decode_id(payload, &["id"]),
            status: first_string(payload, &["status"]).unwrap_or_else(|| "ACTIVE".to_owned()),
            school_id,
            package: payload
                .get("package")
                .filter(|p| p.is_object())
                .map(PackageSummary::decode),
            started_at: first_date(payload, &["startDate", "startedAt"]),
            expires_at: first_date(payload, &["endDate", "expiresAt"]),
            renewed_at: first_date(payload, &["renewedAt"]),
            auto_renew: payload
                .get("autoRenew")
                .or_else(|| payload.get("auto_renew"))
                .and_then(Value::as_bool)
                .unwrap_or(false),
        }
    }
}

fn first_date(payload: &Value, fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|field| payload.get(*field).and_then(normalize_date))
}
