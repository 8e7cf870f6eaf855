//! Core domain entities representing the service's data model.
//!
//! Entities are plain data structures without business logic:
//!
//! - [`UpstreamFact`] - payload deserialized from the fact provider
//! - [`ShortenedFact`] - a fetched fact paired with its alias
//! - [`CachedFact`] - in-memory record with an atomic access counter
//! - [`AccessStat`] - read-only projection of an alias's access count

pub mod fact;

pub use fact::{AccessStat, CachedFact, ShortenedFact, UpstreamFact};
