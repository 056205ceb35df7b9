//! # Platform Envelope Decoding
//!
//! Responses from the platform API grew across several backend generations,
//! so the same listing may put its rows at the top level or under `data`,
//! and its pagination metadata at `pagination`, `meta`, `data.pagination`,
//! or `data.meta`. Field names drifted too (`priceMonthly` vs
//! `monthlyPrice` vs `price`, `endDate` vs `expiresAt`, ...).
//!
//! This crate is the single place those shapes are reconciled. Every
//! decoder is total: missing or misshapen fields degrade to documented
//! defaults, never to an error.

mod analytics;
mod envelope;
mod package;
mod school;
mod subscription;

pub use crate::analytics::{
    ChurnAnalytics, DashboardOverview, DashboardTotals, FinancialAnalytics, RecentSubscription,
    ReportsTotals, SchoolComparisonEntry, TrendPoint,
};
pub use crate::envelope::{DEFAULT_PAGE_LIMIT, extract_data, reconcile_page};
pub use crate::package::PackageSummary;
pub use crate::school::SchoolSummary;
pub use crate::subscription::SubscriptionSummary;
