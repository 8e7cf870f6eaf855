//! Counter-based alias allocator.

use std::collections::HashMap;
use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::json;
use tracing::info;

use crate::domain::repositories::UrlShortener;
use crate::error::AppError;
use crate::utils::base26::encode_base26;

/// Allocates base-26 aliases from a shared monotonic counter.
///
/// The counter starts at 1, so an allocated alias is never the empty string.
/// One counter value is consumed per distinct long URL; repeat requests hit
/// the map and never tick the counter. Mappings are kept for the life of the
/// process, there is no eviction.
pub struct Base26UrlShortener {
    counter: AtomicU64,
    aliases: RwLock<HashMap<String, String>>,
}

impl Base26UrlShortener {
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
            aliases: RwLock::new(HashMap::new()),
        }
    }

    /// Number of distinct URLs seen so far.
    pub fn len(&self) -> usize {
        self.aliases.read().expect("alias map lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Base26UrlShortener {
    fn default() -> Self {
        Self::new()
    }
}

impl UrlShortener for Base26UrlShortener {
    fn get_or_create_alias(&self, long_url: &str) -> Result<String, AppError> {
        if long_url.trim().is_empty() {
            return Err(AppError::bad_request(
                "Invalid long URL",
                json!({ "long_url": long_url }),
            ));
        }

        if let Some(alias) = self
            .aliases
            .read()
            .expect("alias map lock poisoned")
            .get(long_url)
        {
            return Ok(alias.clone());
        }

        // Miss path: the write lock makes reserve-encode-record atomic, and
        // the entry check under it handles the race where another caller
        // allocated the same URL between our read and write.
        let mut aliases = self.aliases.write().expect("alias map lock poisoned");
        let alias = aliases
            .entry(long_url.to_string())
            .or_insert_with(|| {
                let alias = encode_base26(self.counter.fetch_add(1, Ordering::Relaxed));
                info!(%alias, long_url, "computed alias mapping");
                alias
            })
            .clone();

        Ok(alias)
    }
}
