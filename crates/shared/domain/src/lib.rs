//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `indexmap`).
//! Keep it lean: no I/O, no networking, just data and simple helpers.

pub mod constants;
pub mod features;
pub mod paging;
pub mod rows;
