//! Trait definitions abstracting the service's collaborators.
//!
//! These traits are the seams of the core: the orchestrating service depends
//! only on them, and concrete implementations live in
//! `crate::infrastructure`. Mock implementations are generated via `mockall`
//! for unit tests.
//!
//! # Available traits
//!
//! - [`FactProvider`] - upstream fact fetching (with internal retry)
//! - [`FactCache`] - alias-keyed fact cache with access counters
//! - [`UrlShortener`] - alias allocation for long URLs

pub mod fact_cache;
pub mod fact_provider;
pub mod url_shortener;

pub use fact_cache::FactCache;
pub use fact_provider::FactProvider;
pub use url_shortener::UrlShortener;

#[cfg(test)]
pub use fact_cache::MockFactCache;
#[cfg(test)]
pub use fact_provider::MockFactProvider;
#[cfg(test)]
pub use url_shortener::MockUrlShortener;
