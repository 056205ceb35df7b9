//! # Query Identity & Caching
//!
//! Server-state queries are identified by hierarchical keys
//! (`platform / packages / list / {filters}`), so a whole family can be
//! invalidated by prefix after a mutation. Filter sets are canonicalized
//! into the key, which makes structurally equal filters produce equal
//! keys no matter how the caller assembled them.

mod cache;
mod keys;

pub use crate::cache::{QueryCache, QueryCacheConfig};
pub use crate::keys::{QueryKey, QueryScope, Segment};
