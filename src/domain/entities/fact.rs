//! Fact entities: the upstream payload and the cached record built from it.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Deserialize;

/// A fact as returned by the upstream provider.
///
/// Only the fields consumed by this service are deserialized; anything else
/// in the provider's payload is ignored. The value is transient: it is
/// produced once per successful fetch and consumed immediately to build a
/// [`CachedFact`].
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamFact {
    pub id: String,
    pub text: String,
    pub permalink: String,
}

/// A fact processed for a client response: the text plus its alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenedFact {
    pub text: String,
    pub alias: String,
}

/// A cache record holding fact data and its access counter.
///
/// `fact` and `original_url` are immutable after creation. The access counter
/// is owned by the cache holding this record; callers never receive the
/// counter itself, only point-in-time values via [`CachedFact::access_count`]
/// or a snapshot.
#[derive(Debug)]
pub struct CachedFact {
    pub fact: String,
    pub original_url: String,
    access_count: AtomicU64,
}

impl CachedFact {
    /// Creates a record with its access counter at zero.
    pub fn new(fact: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            fact: fact.into(),
            original_url: original_url.into(),
            access_count: AtomicU64::new(0),
        }
    }

    /// Atomically increments the access counter by one.
    ///
    /// A single indivisible read-modify-write, so concurrent callers never
    /// lose updates.
    pub fn record_access(&self) -> u64 {
        self.access_count.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Current access count.
    pub fn access_count(&self) -> u64 {
        self.access_count.load(Ordering::Relaxed)
    }
}

/// Point-in-time projection of a cache record's access count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessStat {
    pub alias: String,
    pub access_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cached_fact_starts_at_zero() {
        let record = CachedFact::new("Bananas are berries.", "https://provider/api/facts/1");
        assert_eq!(record.access_count(), 0);
        assert_eq!(record.fact, "Bananas are berries.");
        assert_eq!(record.original_url, "https://provider/api/facts/1");
    }

    #[test]
    fn test_record_access_returns_new_value() {
        let record = CachedFact::new("fact", "https://provider/api/facts/2");
        assert_eq!(record.record_access(), 1);
        assert_eq!(record.record_access(), 2);
        assert_eq!(record.access_count(), 2);
    }

    #[test]
    fn test_upstream_fact_ignores_unknown_fields() {
        let payload = r#"{
            "id": "abc",
            "text": "Honey never spoils.",
            "source": "djtech.net",
            "permalink": "https://provider/api/facts/abc",
            "language": "en"
        }"#;

        let fact: UpstreamFact = serde_json::from_str(payload).unwrap();
        assert_eq!(fact.id, "abc");
        assert_eq!(fact.text, "Honey never spoils.");
        assert_eq!(fact.permalink, "https://provider/api/facts/abc");
    }
}
