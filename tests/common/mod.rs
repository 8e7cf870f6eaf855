#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::Engine as _;
use fact_service::application::services::{AuthService, FactService};
use fact_service::domain::entities::UpstreamFact;
use fact_service::domain::repositories::FactProvider;
use fact_service::error::AppError;
use fact_service::infrastructure::cache::InMemoryFactCache;
use fact_service::infrastructure::shortener::Base26UrlShortener;
use fact_service::state::AppState;
use serde_json::json;

pub const TEST_ADMIN_USERNAME: &str = "admin";
pub const TEST_ADMIN_PASSWORD: &str = "test-password";

pub fn upstream_fact(id: &str, text: &str, permalink: &str) -> UpstreamFact {
    UpstreamFact {
        id: id.to_string(),
        text: text.to_string(),
        permalink: permalink.to_string(),
    }
}

/// Fact provider stub yielding a scripted sequence of facts.
///
/// Returns an internal error once the script runs dry, so a test that
/// over-fetches fails loudly instead of looping.
pub struct ScriptedFactProvider {
    facts: Mutex<VecDeque<UpstreamFact>>,
}

impl ScriptedFactProvider {
    pub fn new(facts: Vec<UpstreamFact>) -> Self {
        Self {
            facts: Mutex::new(facts.into()),
        }
    }
}

#[async_trait]
impl FactProvider for ScriptedFactProvider {
    async fn fetch_fact(&self) -> Result<UpstreamFact, AppError> {
        self.facts
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AppError::internal("Scripted provider exhausted", json!({})))
    }
}

/// Builds an application state around the given provider with real in-memory
/// shortener and cache implementations.
pub fn create_test_state(provider: Arc<dyn FactProvider>) -> AppState {
    let shortener = Arc::new(Base26UrlShortener::new());
    let cache = Arc::new(InMemoryFactCache::new());

    let fact_service = Arc::new(FactService::new(provider, shortener, cache));
    let auth_service = Arc::new(AuthService::new(TEST_ADMIN_USERNAME, TEST_ADMIN_PASSWORD));

    AppState::new(fact_service, auth_service)
}

/// `Authorization` header value for HTTP Basic credentials.
pub fn basic_auth_header(username: &str, password: &str) -> String {
    let credentials =
        base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {credentials}")
}
