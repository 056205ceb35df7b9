use proptest::prelude::*;
use serde_json::Value;
use shub_normalize::normalize_string;
use shub_platform::{
    ChurnAnalytics, DashboardOverview, FinancialAnalytics, PackageSummary, ReportsTotals,
    SchoolComparisonEntry, SchoolSummary, SubscriptionSummary, reconcile_page,
};

/// Arbitrary JSON values, a few levels deep, strings included.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<f64>().prop_map(Value::from),
        "[ -~]{0,24}".prop_map(Value::from),
    ];
    leaf.prop_recursive(3, 32, 8, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6).prop_map(Value::from),
            proptest::collection::btree_map("[a-z_]{1,8}", inner, 0..6)
                .prop_map(|m| Value::from(serde_json::Map::from_iter(m))),
        ]
    })
}

proptest! {
    #[test]
    fn reconcile_page_holds_its_floors_on_any_envelope(payload in arb_json()) {
        let page = reconcile_page(&payload, 25, normalize_string);
        prop_assert!(page.page >= 1);
        prop_assert!(page.total_pages >= 1);
    }

    #[test]
    fn every_decoder_is_total(payload in arb_json()) {
        let _ = PackageSummary::decode(&payload);
        let _ = SchoolSummary::decode(&payload);
        let _ = SubscriptionSummary::decode(&payload);
        let _ = DashboardOverview::decode(&payload);
        let _ = FinancialAnalytics::decode(&payload);
        let _ = ChurnAnalytics::decode(&payload);
        let _ = ReportsTotals::decode(&payload);
        let _ = SchoolComparisonEntry::decode_list(&payload);
    }
}
