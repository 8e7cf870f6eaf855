//! In-memory implementation of the fact cache.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::json;

use crate::domain::entities::{AccessStat, CachedFact};
use crate::domain::repositories::FactCache;
use crate::error::AppError;

/// Process-lifetime fact cache keyed by alias.
///
/// Records are held behind an `RwLock`ed map of `Arc`s: lookups clone the
/// `Arc` and drop the lock before touching the record, so increments on the
/// shared atomic counter never serialize behind the map lock. Records are
/// never removed.
pub struct InMemoryFactCache {
    records: RwLock<HashMap<String, Arc<CachedFact>>>,
}

impl InMemoryFactCache {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.records.read().expect("fact cache lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Shared validation and lookup for the read paths.
    ///
    /// Both increment and URL lookup distinguish a malformed key
    /// (`Validation`) from a well-formed key with no record (`NotFound`).
    fn lookup(&self, alias: &str) -> Result<Arc<CachedFact>, AppError> {
        if alias.trim().is_empty() {
            return Err(AppError::bad_request(
                "Invalid alias",
                json!({ "alias": alias }),
            ));
        }

        self.records
            .read()
            .expect("fact cache lock poisoned")
            .get(alias)
            .cloned()
            .ok_or_else(|| {
                AppError::not_found("No cached fact for alias", json!({ "alias": alias }))
            })
    }
}

impl Default for InMemoryFactCache {
    fn default() -> Self {
        Self::new()
    }
}

impl FactCache for InMemoryFactCache {
    fn insert_if_absent(&self, alias: &str, fact: &str, original_url: &str) {
        let mut records = self.records.write().expect("fact cache lock poisoned");
        records
            .entry(alias.to_string())
            .or_insert_with(|| Arc::new(CachedFact::new(fact, original_url)));
    }

    fn increment_access_count(&self, alias: &str) -> Result<(), AppError> {
        self.lookup(alias)?.record_access();
        Ok(())
    }

    fn get_original_url(&self, alias: &str) -> Result<String, AppError> {
        Ok(self.lookup(alias)?.original_url.clone())
    }

    fn snapshot(&self) -> Vec<AccessStat> {
        self.records
            .read()
            .expect("fact cache lock poisoned")
            .iter()
            .map(|(alias, record)| AccessStat {
                alias: alias.clone(),
                access_count: record.access_count(),
            })
            .collect()
    }
}
