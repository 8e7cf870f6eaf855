//! DTOs for the access statistics endpoint.

use serde::Serialize;

use crate::domain::entities::AccessStat;

/// Access statistics for a single alias.
#[derive(Debug, Serialize)]
pub struct AccessStatItem {
    pub shortened_url: String,
    pub access_count: u64,
}

impl From<AccessStat> for AccessStatItem {
    fn from(stat: AccessStat) -> Self {
        Self {
            shortened_url: stat.alias,
            access_count: stat.access_count,
        }
    }
}
