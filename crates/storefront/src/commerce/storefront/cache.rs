//! Response cache for Storefront API requests.
//!
//! Entries are the raw response bodies of successful calls, keyed by the
//! serialized request (document, operation name and variables). Decoding
//! happens on every read, so a cached body goes through exactly the same
//! classification as a fresh one.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

/// Upper bound on cached response bodies.
const MAX_CACHED_RESPONSES: u64 = 1000;

/// How a request interacts with the response cache.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CacheMode {
    /// Reuse a cached response for the same request within the revalidation
    /// window; store successful fresh responses.
    #[default]
    ForceCache,
    /// Always call the API and never populate the cache.
    NoStore,
}

impl CacheMode {
    /// Whether responses may be read from and written to the cache.
    #[must_use]
    pub const fn uses_cache(self) -> bool {
        matches!(self, Self::ForceCache)
    }
}

/// A successful response body kept for reuse.
#[derive(Debug, Clone)]
pub(super) struct CachedResponse {
    pub status: u16,
    pub body: Arc<str>,
}

pub(super) type ResponseCache = Cache<String, CachedResponse>;

/// Build the response cache with the given revalidation window.
pub(super) fn response_cache(revalidate: Duration) -> ResponseCache {
    Cache::builder()
        .max_capacity(MAX_CACHED_RESPONSES)
        .time_to_live(revalidate)
        .build()
}
