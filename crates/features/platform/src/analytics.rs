//! Decoders for the platform analytics endpoints. Every count and amount
//! goes through the number normalizer, so numeric strings and decimal
//! wrappers survive; anything else decodes to zero rather than failing.

use crate::envelope::extract_data;
use crate::package::{decode_id, first_string};
use serde::Serialize;
use serde_json::Value;
use shub_normalize::{normalize_date, normalize_number, normalize_u64};

const DEFAULT_RANGE: &str = "30d";

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTotals {
    pub schools: u64,
    pub active_schools: u64,
    pub subscriptions: u64,
    pub active_subscriptions: u64,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentSubscription {
    pub id: String,
    pub status: String,
    pub created_at: Option<String>,
    pub school_id: Option<String>,
    pub school_name: Option<String>,
    pub package_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub totals: DashboardTotals,
    pub recent_subscriptions: Vec<RecentSubscription>,
}

impl DashboardOverview {
    #[must_use]
    pub fn decode(payload: &Value) -> Self {
        let data = inner(payload);
        let totals = data.get("totals").unwrap_or(&Value::Null);
        let recent = data
            .get("recentSubscriptions")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        Self {
            totals: DashboardTotals {
                schools: count(totals, "schools"),
                active_schools: count(totals, "activeSchools"),
                subscriptions: count(totals, "subscriptions"),
                active_subscriptions: count(totals, "activeSubscriptions"),
                revenue: amount(totals, "revenue"),
            },
            recent_subscriptions: recent.iter().map(RecentSubscription::decode).collect(),
        }
    }
}

impl RecentSubscription {
    fn decode(entry: &Value) -> Self {
        let school = entry.get("school").filter(|s| s.is_object());
        Self {
            id: decode_id(entry, &["id"]),
            status: first_string(entry, &["status"]).unwrap_or_else(|| "ACTIVE".to_owned()),
            created_at: entry.get("createdAt").and_then(normalize_date),
            school_id: school.map(|s| decode_id(s, &["id"])),
            school_name: school.and_then(|s| first_string(s, &["name"])),
            package_name: entry
                .get("package")
                .and_then(|p| first_string(p, &["name"])),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialAnalytics {
    pub range: String,
    pub revenue: f64,
    pub outstanding: f64,
    pub unique_paying_schools: u64,
    pub mrr: f64,
    pub arr: f64,
    pub average_revenue_per_school: f64,
    pub average_transaction_value: f64,
}

impl FinancialAnalytics {
    #[must_use]
    pub fn decode(payload: &Value) -> Self {
        let data = inner(payload);
        Self {
            range: range(data),
            revenue: amount(data, "revenue"),
            outstanding: amount(data, "outstanding"),
            unique_paying_schools: count(data, "uniquePayingSchools"),
            mrr: amount(data, "mrr"),
            arr: amount(data, "arr"),
            average_revenue_per_school: amount(data, "averageRevenuePerSchool"),
            average_transaction_value: amount(data, "averageTransactionValue"),
        }
    }
}

/// A labeled point on an analytics trend line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChurnAnalytics {
    pub range: String,
    pub churn_rate: f64,
    pub cancellations: u64,
    pub reactivations: u64,
    pub net_change: f64,
    pub trend: Vec<TrendPoint>,
}

impl ChurnAnalytics {
    #[must_use]
    pub fn decode(payload: &Value) -> Self {
        let data = inner(payload);
        let trend = data
            .get("trend")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        Self {
            range: range(data),
            churn_rate: amount(data, "churnRate"),
            cancellations: count(data, "cancellations"),
            reactivations: count(data, "reactivations"),
            net_change: amount(data, "netChange"),
            trend: trend
                .iter()
                .map(|entry| TrendPoint {
                    label: first_string(entry, &["label"]).unwrap_or_default(),
                    value: amount(entry, "value"),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportsTotals {
    pub students: u64,
    pub teachers: u64,
    pub staff: u64,
    pub parents: u64,
    pub schools: u64,
    pub active_schools: u64,
    pub revenue: f64,
    pub transactions: u64,
}

impl ReportsTotals {
    #[must_use]
    pub fn decode(payload: &Value) -> Self {
        let data = inner(payload);
        let totals = data.get("totals").unwrap_or(&Value::Null);
        Self {
            students: count(totals, "students"),
            teachers: count(totals, "teachers"),
            staff: count(totals, "staff"),
            parents: count(totals, "parents"),
            schools: count(totals, "schools"),
            active_schools: count(totals, "activeSchools"),
            revenue: amount(totals, "revenue"),
            transactions: count(totals, "transactions"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolComparisonEntry {
    pub school_id: String,
    pub school_name: String,
    pub metric: String,
    pub value: f64,
    pub rank: u64,
}

impl SchoolComparisonEntry {
    /// Decodes a comparison listing; the row array may sit at the top
    /// level or under `data`. Missing ranks default to the row's
    /// position, counted from one.
    #[must_use]
    pub fn decode_list(payload: &Value) -> Vec<Self> {
        let rows = match extract_data(payload) {
            Value::Array(rows) => rows.as_slice(),
            _ => &[],
        };

        rows.iter()
            .enumerate()
            .map(|(index, entry)| {
                let position = index as u64 + 1;
                Self {
                    school_id: decode_id(entry, &["schoolId"]),
                    school_name: first_string(entry, &["schoolName", "name"])
                        .unwrap_or_else(|| format!("School {position}")),
                    metric: first_string(entry, &["metric"])
                        .unwrap_or_else(|| "students".to_owned()),
                    value: amount(entry, "value"),
                    rank: entry
                        .get("rank")
                        .map_or(position, |rank| normalize_u64(rank, position)),
                }
            })
            .collect()
    }
}

/// Analytics payloads sometimes wrap the body twice: the transport
/// envelope and then an inner `data` object.
fn inner(payload: &Value) -> &Value {
    extract_data(extract_data(payload))
}

fn range(data: &Value) -> String {
    first_string(data, &["range"]).unwrap_or_else(|| DEFAULT_RANGE.to_owned())
}

fn amount(data: &Value, field: &str) -> f64 {
    data.get(field).map_or(0.0, |value| normalize_number(value, 0.0))
}

fn count(data: &Value, field: &str) -> u64 {
    data.get(field).map_or(0, |value| normalize_u64(value, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn overview_reads_totals_and_recent_rows() {
        let payload = json!({
            "data": {
                "totals": {"schools": "12", "activeSchools": 9, "revenue": {"d": [4500]}},
                "recentSubscriptions": [
                    {
                        "id": 3,
                        "createdAt": "2026-08-01T10:00:00Z",
                        "school": {"id": 5, "name": "North Campus"},
                        "package": {"id": 1, "name": "Premium"},
                    },
                ],
            },
        });

        let overview = DashboardOverview::decode(&payload);
        assert_eq!(overview.totals.schools, 12);
        assert_eq!(overview.totals.active_schools, 9);
        assert_eq!(overview.totals.subscriptions, 0);
        assert!((overview.totals.revenue - 4500.0).abs() < f64::EPSILON);

        let recent = &overview.recent_subscriptions[0];
        assert_eq!(recent.id, "3");
        assert_eq!(recent.status, "ACTIVE");
        assert_eq!(recent.school_name.as_deref(), Some("North Campus"));
        assert_eq!(recent.package_name.as_deref(), Some("Premium"));
    }

    #[test]
    fn financials_default_the_range_and_zero_missing_amounts() {
        let analytics = FinancialAnalytics::decode(&json!({"revenue": "199.99", "mrr": 40}));
        assert_eq!(analytics.range, "30d");
        assert!((analytics.revenue - 199.99).abs() < 1e-9);
        assert!((analytics.mrr - 40.0).abs() < f64::EPSILON);
        assert!((analytics.outstanding).abs() < f64::EPSILON);
        assert_eq!(analytics.unique_paying_schools, 0);
    }

    #[test]
    fn churn_trend_tolerates_mangled_entries() {
        let analytics = ChurnAnalytics::decode(&json!({
            "range": "90d",
            "churnRate": "2.5",
            "cancellations": 4,
            "trend": [
                {"label": "Jun", "value": "10"},
                {"value": null},
            ],
        }));

        assert_eq!(analytics.range, "90d");
        assert!((analytics.churn_rate - 2.5).abs() < f64::EPSILON);
        assert_eq!(analytics.cancellations, 4);
        assert_eq!(
            analytics.trend,
            vec![
                TrendPoint { label: "Jun".to_owned(), value: 10.0 },
                TrendPoint { label: String::new(), value: 0.0 },
            ],
        );
    }

    #[test]
    fn comparison_rows_rank_by_position_when_unranked() {
        let rows = SchoolComparisonEntry::decode_list(&json!({
            "data": [
                {"schoolId": 1, "name": "Alpha", "value": 300},
                {"schoolId": 2, "schoolName": "Beta", "value": 120, "rank": 7},
                {},
            ],
        }));

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].school_name, "Alpha");
        assert_eq!(rows[0].rank, 1);
        assert_eq!(rows[1].rank, 7);
        assert_eq!(rows[2].school_name, "School 3");
        assert_eq!(rows[2].school_id, "unknown");
        assert_eq!(rows[2].metric, "students");
    }

    #[test]
    fn reports_totals_decode_from_an_empty_body() {
        let totals = ReportsTotals::decode(&json!({}));
        assert_eq!(totals.students, 0);
        assert_eq!(totals.transactions, 0);
    }
}
