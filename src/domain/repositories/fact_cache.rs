//! Trait for the in-memory fact cache.

use crate::domain::entities::AccessStat;
use crate::error::AppError;

/// Cache of fact records keyed by alias.
///
/// Implementations must be safe for concurrent use without external locking:
/// insertion is atomic per alias and counter increments are indivisible.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::InMemoryFactCache`]
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
pub trait FactCache: Send + Sync {
    /// Stores a record under `alias` if and only if none exists yet.
    ///
    /// The first insert wins; later calls for the same alias are no-ops and
    /// never overwrite the stored fact or URL.
    fn insert_if_absent(&self, alias: &str, fact: &str, original_url: &str);

    /// Atomically increments the access counter for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an empty or blank alias and
    /// [`AppError::NotFound`] for a well-formed alias with no record.
    fn increment_access_count(&self, alias: &str) -> Result<(), AppError>;

    /// Returns the original URL stored for `alias`.
    ///
    /// # Errors
    ///
    /// Same validation and error kinds as
    /// [`FactCache::increment_access_count`].
    fn get_original_url(&self, alias: &str) -> Result<String, AppError>;

    /// Point-in-time list of `(alias, access_count)` for every record.
    ///
    /// Counts for different aliases may be observed at slightly different
    /// instants; no cross-entry consistency is promised.
    fn snapshot(&self) -> Vec<AccessStat>;
}
