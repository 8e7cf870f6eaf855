//! Upstream fact provider integration.
//!
//! - [`retry`] - reusable retry policy with exponential backoff
//! - [`useless_facts`] - HTTP client with failure classification

pub mod retry;
pub mod useless_facts;

pub use retry::{RetryPolicy, retry_with_backoff};
pub use useless_facts::UselessFactsClient;
