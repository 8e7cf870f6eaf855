use std::sync::Arc;

use crate::application::services::{AuthService, FactService};

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub fact_service: Arc<FactService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(fact_service: Arc<FactService>, auth_service: Arc<AuthService>) -> Self {
        Self {
            fact_service,
            auth_service,
        }
    }
}
