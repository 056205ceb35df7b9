//! Canonical paged-result shape handed to tables and lists.

use serde::{Deserialize, Serialize};

/// One page of a listing plus its pagination metadata.
///
/// Invariants (upheld by the envelope reconciler): `page >= 1` and
/// `total_pages >= 1`, whatever the backend sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
    /// 1-based page index.
    pub page: u64,
    pub limit: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// An empty first page with the given page size.
    #[must_use]
    pub const fn empty(limit: u64) -> Self {
        Self { data: Vec::new(), total: 0, page: 1, limit, total_pages: 1 }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Maps the rows while keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty(25)
    }
}
