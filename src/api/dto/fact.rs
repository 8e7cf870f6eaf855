//! DTOs for the fact creation endpoint.

use serde::Serialize;

use crate::domain::entities::ShortenedFact;

/// Response for a fetched-and-shortened fact.
#[derive(Debug, Serialize)]
pub struct FactResponse {
    /// The fact text as returned by the provider.
    pub original_fact: String,
    /// The alias assigned to the fact's permalink.
    pub shortened_url: String,
}

impl From<ShortenedFact> for FactResponse {
    fn from(fact: ShortenedFact) -> Self {
        Self {
            original_fact: fact.text,
            shortened_url: fact.alias,
        }
    }
}
