//! Trait for fetching facts from the upstream provider.

use crate::domain::entities::UpstreamFact;
use crate::error::AppError;
use async_trait::async_trait;

/// Gateway to the upstream fact provider.
///
/// Implementations own the full resilience story: they classify failures and
/// retry transient ones internally, so a returned error is already final.
///
/// # Implementations
///
/// - [`crate::infrastructure::upstream::UselessFactsClient`] - HTTP client
///   with retry and exponential backoff
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FactProvider: Send + Sync {
    /// Fetches a random fact.
    ///
    /// # Errors
    ///
    /// Returns the last classified error once the retry budget is exhausted:
    /// [`AppError::RateLimited`], [`AppError::UpstreamClient`],
    /// [`AppError::UpstreamServer`], or [`AppError::Transport`].
    async fn fetch_fact(&self) -> Result<UpstreamFact, AppError>;
}
