//! Trait for allocating aliases for long URLs.

use crate::error::AppError;

/// Allocator of process-unique aliases for long URLs.
///
/// Implementations guarantee exactly one alias per distinct long URL across
/// any interleaving of concurrent calls, and never hand the same alias to two
/// different URLs.
///
/// # Implementations
///
/// - [`crate::infrastructure::shortener::Base26UrlShortener`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait UrlShortener: Send + Sync {
    /// Returns the alias for `long_url`, allocating one on first sight.
    ///
    /// The miss path (reserve a counter value, encode it, record the mapping)
    /// is a single atomic operation; repeat calls return the stored alias
    /// without consuming another counter value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when `long_url` is empty after
    /// trimming whitespace.
    fn get_or_create_alias(&self, long_url: &str) -> Result<String, AppError>;
}
