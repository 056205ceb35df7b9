use crate::keys::QueryKey;
use moka::sync::Cache;
use std::time::Duration;

const DEFAULT_CAPACITY: u64 = 1_024;
const DEFAULT_TTL_SECONDS: u64 = 5 * 60;

/// Capacity and freshness settings for a [`QueryCache`].
#[derive(Debug, Clone, Copy)]
pub struct QueryCacheConfig {
    pub capacity: u64,
    pub time_to_live: Duration,
}

impl Default for QueryCacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            time_to_live: Duration::from_secs(DEFAULT_TTL_SECONDS),
        }
    }
}

/// A query-keyed cache of decoded server state.
///
/// Entries expire by TTL; mutations call [`Self::invalidate_scope`] with
/// a key prefix to drop every query in the affected family at once.
pub struct QueryCache<T> {
    inner: Cache<QueryKey, T>,
}

impl<T> std::fmt::Debug for QueryCache<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryCache").field("entries", &self.inner.entry_count()).finish()
    }
}

impl<T: Clone + Send + Sync + 'static> QueryCache<T> {
    #[must_use]
    pub fn new(config: QueryCacheConfig) -> Self {
        let inner = Cache::builder()
            .max_capacity(config.capacity)
            .time_to_live(config.time_to_live)
            .build();
        Self { inner }
    }

    #[must_use]
    pub fn get(&self, key: &QueryKey) -> Option<T> {
        self.inner.get(key)
    }

    pub fn insert(&self, key: QueryKey, value: T) {
        self.inner.insert(key, value);
    }

    /// Returns the cached value for `key`, running `fetch` to fill the
    /// entry on a miss. Concurrent callers for the same key share one
    /// `fetch` run.
    pub fn get_or_insert_with(&self, key: QueryKey, fetch: impl FnOnce() -> T) -> T {
        self.inner.get_with(key, fetch)
    }

    /// Drops every entry whose key is `prefix` or sits below it.
    pub fn invalidate_scope(&self, prefix: &QueryKey) {
        for (key, _) in &self.inner {
            if key.starts_with(prefix) {
                self.inner.invalidate(&*key);
            }
        }
    }

    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for QueryCache<T> {
    fn default() -> Self {
        Self::new(QueryCacheConfig::default())
    }
}
