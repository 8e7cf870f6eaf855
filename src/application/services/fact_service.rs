//! Fact orchestration service.

use std::sync::Arc;

use crate::domain::entities::{AccessStat, ShortenedFact};
use crate::domain::repositories::{FactCache, FactProvider, UrlShortener};
use crate::error::AppError;

/// Composes the fact provider, alias allocator and cache per request.
///
/// Collaborators are injected as trait objects so tests (and any future
/// provider) can swap implementations without touching the flow. Allocating
/// an alias and caching the fact are two independent atomic steps, not a
/// transaction: a concurrent reader may observe an alias before its record
/// exists and gets `NotFound` until the insert lands.
pub struct FactService {
    provider: Arc<dyn FactProvider>,
    shortener: Arc<dyn UrlShortener>,
    cache: Arc<dyn FactCache>,
}

impl FactService {
    pub fn new(
        provider: Arc<dyn FactProvider>,
        shortener: Arc<dyn UrlShortener>,
        cache: Arc<dyn FactCache>,
    ) -> Self {
        Self {
            provider,
            shortener,
            cache,
        }
    }

    /// Fetches a fact, allocates an alias for its permalink and caches it.
    ///
    /// A fact whose permalink was seen before reuses the existing alias and
    /// leaves the stored record untouched (first insert wins).
    ///
    /// # Errors
    ///
    /// Propagates the provider's classified error once its retry budget is
    /// exhausted; nothing is committed before the fetch succeeds, so no
    /// compensation is needed.
    pub async fn create_fact(&self) -> Result<ShortenedFact, AppError> {
        let fact = self.provider.fetch_fact().await?;

        let alias = self.shortener.get_or_create_alias(&fact.permalink)?;

        self.cache
            .insert_if_absent(&alias, &fact.text, &fact.permalink);

        Ok(ShortenedFact {
            text: fact.text,
            alias,
        })
    }

    /// Records an access and returns the original URL for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a blank alias and
    /// [`AppError::NotFound`] for an unknown one.
    pub fn redirect(&self, alias: &str) -> Result<String, AppError> {
        self.cache.increment_access_count(alias)?;
        self.cache.get_original_url(alias)
    }

    /// Access counts for every cached alias.
    pub fn statistics(&self) -> Vec<AccessStat> {
        self.cache.snapshot()
    }
}
