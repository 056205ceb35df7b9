use serde::Serialize;
use serde_json::Value;
use shub_domain::features::FeatureBag;
use shub_normalize::{normalize_date, normalize_number, normalize_string};
use shub_packages::normalize_feature_bag;

/// A subscription package as the admin screens consume it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price_monthly: f64,
    pub price_yearly: f64,
    pub is_active: bool,
    pub features: FeatureBag,
    pub support_level: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl PackageSummary {
    /// Decodes a package payload, tolerating every known field spelling.
    ///
    /// Prices walk the historical fallback chains (`priceMonthly` →
    /// `monthlyPrice` → `price`, `priceYearly` → `annualPrice` →
    /// `yearlyPrice`); an absent id becomes `"unknown"`, an absent name
    /// `"Unnamed Package"`, and `isActive` defaults to active.
    #[must_use]
    pub fn decode(payload: &Value) -> Self {
        Self {
            id: decode_id(payload, &["id", "packageId"]),
            name: first_string(payload, &["name"]).unwrap_or_else(|| "Unnamed Package".to_owned()),
            description: first_string(payload, &["description"]),
            price_monthly: first_number(payload, &["priceMonthly", "monthlyPrice", "price"]),
            price_yearly: first_number(payload, &["priceYearly", "annualPrice", "yearlyPrice"]),
            is_active: payload
                .get("isActive")
                .or_else(|| payload.get("active"))
                .and_then(Value::as_bool)
                .unwrap_or(true),
            features: normalize_feature_bag(payload.get("features")),
            support_level: first_string(payload, &["supportLevel", "supportTier"]),
            created_at: payload.get("createdAt").and_then(normalize_date),
            updated_at: payload.get("updatedAt").and_then(normalize_date),
        }
    }
}

/// Stringifies an identifier that may arrive as a string or a number.
pub(crate) fn decode_id(payload: &Value, fields: &[&str]) -> String {
    fields
        .iter()
        .find_map(|field| id_value(payload, field))
        .unwrap_or_else(|| "unknown".to_owned())
}

pub(crate) fn id_value(payload: &Value, field: &str) -> Option<String> {
    match payload.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn first_string(payload: &Value, fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|field| payload.get(*field).and_then(normalize_string))
}

pub(crate) fn first_number(payload: &Value, fields: &[&str]) -> f64 {
    fields
        .iter()
        .filter_map(|field| payload.get(*field))
        .find(|v| !v.is_null())
        .map_or(0.0, |v| normalize_number(v, 0.0))
}
