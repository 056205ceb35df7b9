//! # Package Feature Engine
//!
//! A package (subscription tier) carries a schema-less "feature bag": a flat
//! key → value map of entitlements with no fixed key set. The backend hands
//! it over as a JSON object, a JSON-encoded string, or nothing at all, and
//! the editor needs it as an ordered list of typed rows. This crate owns
//! both directions:
//!
//! * [`normalize_feature_bag`] / [`serialize_feature_bag`]: payload to
//!   canonical bag (defaults filled, `modules_enabled` always a list) and
//!   the idempotent pre-transmission pass;
//! * [`detect_kind`] / [`coerce_boolean`] / [`format_for_edit`]: the type
//!   inference and coercion rules shared by both directions;
//! * [`bag_to_rows`] / [`rows_to_bag`]: the bag-to-rows mapping with
//!   round-trip fidelity, reserved keys first.
//!
//! Every function is total and pure; the only side effect anywhere is a
//! `tracing::warn!` when a feature payload string is not valid JSON.

mod bag;
mod coerce;
mod infer;
mod rows;

pub use crate::bag::{build_defaults, normalize_feature_bag, serialize_feature_bag};
pub use crate::coerce::{coerce_boolean, coerce_boolean_text, format_for_edit};
pub use crate::infer::{detect_kind, detect_kind_json};
pub use crate::rows::{bag_to_rows, rows_to_bag};
