//! HTTP client for the Useless Facts API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::json;
use tracing::debug;

use super::retry::{RetryPolicy, retry_with_backoff};
use crate::domain::entities::UpstreamFact;
use crate::domain::repositories::FactProvider;
use crate::error::AppError;

/// Fact provider backed by a single GET endpoint.
///
/// Each attempt either yields a fully deserialized [`UpstreamFact`] or a
/// classified error; classified failures (including 429) are retried under
/// the configured [`RetryPolicy`] and the last one is surfaced unchanged.
pub struct UselessFactsClient {
    http: Client,
    endpoint: String,
    retry: RetryPolicy,
}

impl UselessFactsClient {
    /// Builds a client with a per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(
        endpoint: impl Into<String>,
        timeout: Duration,
        retry: RetryPolicy,
    ) -> reqwest::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
            retry,
        })
    }

    /// A single fetch attempt with outcome classification.
    async fn fetch_once(&self) -> Result<UpstreamFact, AppError> {
        let response = self.http.get(&self.endpoint).send().await.map_err(|e| {
            AppError::transport(
                "Fact provider request failed",
                json!({ "endpoint": self.endpoint, "reason": e.to_string() }),
            )
        })?;

        let status = response.status();

        if status.is_success() {
            let fact: UpstreamFact = response.json().await.map_err(|e| {
                AppError::transport(
                    "Fact provider returned an unreadable body",
                    json!({ "endpoint": self.endpoint, "reason": e.to_string() }),
                )
            })?;
            debug!(fact_id = %fact.id, "fetched fact");
            return Ok(fact);
        }

        Err(match status {
            StatusCode::TOO_MANY_REQUESTS => AppError::rate_limited(
                "Fact provider rate limit exceeded",
                json!({ "endpoint": self.endpoint }),
            ),
            s if s.is_client_error() => AppError::upstream_client(
                s.as_u16(),
                "Fact provider client error",
                json!({ "endpoint": self.endpoint, "status": s.as_u16() }),
            ),
            s if s.is_server_error() => AppError::upstream_server(
                s.as_u16(),
                "Fact provider server error",
                json!({ "endpoint": self.endpoint, "status": s.as_u16() }),
            ),
            s => AppError::transport(
                "Fact provider returned an unexpected status",
                json!({ "endpoint": self.endpoint, "status": s.as_u16() }),
            ),
        })
    }
}

#[async_trait]
impl FactProvider for UselessFactsClient {
    async fn fetch_fact(&self) -> Result<UpstreamFact, AppError> {
        retry_with_backoff("fetch_fact", &self.retry, || self.fetch_once()).await
    }
}

impl std::fmt::Debug for UselessFactsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UselessFactsClient")
            .field("endpoint", &self.endpoint)
            .field("retry", &self.retry)
            .finish()
    }
}
