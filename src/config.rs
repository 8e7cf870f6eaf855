//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `ADMIN_USERNAME` / `ADMIN_PASSWORD` - Basic-auth credentials for the
//!   statistics endpoint
//!
//! ## Optional Variables
//!
//! - `FACTS_API_URL` - Fact provider endpoint (default: Useless Facts API)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `UPSTREAM_TIMEOUT_SECONDS` - Per-request timeout (default: 10)
//! - `RETRY_MAX_ATTEMPTS` - Upstream attempt budget (default: 5)
//! - `RETRY_BASE_DELAY_MS` - First backoff delay (default: 2000)
//! - `RETRY_MULTIPLIER` - Backoff growth factor (default: 2.0)

use anyhow::{Context, Result};
use std::env;

/// Default fact provider endpoint.
pub const DEFAULT_FACTS_API_URL: &str =
    "https://uselessfacts.jsph.pl/api/v2/facts/random?language=en";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Endpoint the fact provider client GETs for a random fact.
    pub facts_api_url: String,
    /// Per-request timeout for upstream calls, in seconds.
    pub upstream_timeout_seconds: u64,
    /// Total attempt budget for upstream calls (first try included).
    pub retry_max_attempts: u32,
    /// Delay before the second attempt, in milliseconds.
    pub retry_base_delay_ms: u64,
    /// Growth factor applied to the delay between consecutive attempts.
    pub retry_multiplier: f64,
    /// Basic-auth credentials for `GET /admin/statistics`.
    pub admin_username: String,
    pub admin_password: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the admin credentials are missing.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let facts_api_url =
            env::var("FACTS_API_URL").unwrap_or_else(|_| DEFAULT_FACTS_API_URL.to_string());

        let upstream_timeout_seconds = env::var("UPSTREAM_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let retry_max_attempts = env::var("RETRY_MAX_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let retry_base_delay_ms = env::var("RETRY_BASE_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2000);

        let retry_multiplier = env::var("RETRY_MULTIPLIER")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(2.0);

        let admin_username = env::var("ADMIN_USERNAME").context("ADMIN_USERNAME must be set")?;
        let admin_password = env::var("ADMIN_PASSWORD").context("ADMIN_PASSWORD must be set")?;

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            facts_api_url,
            upstream_timeout_seconds,
            retry_max_attempts,
            retry_base_delay_ms,
            retry_multiplier,
            admin_username,
            admin_password,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `log_format` is not `text` or `json`
    /// - `facts_api_url` is not a valid HTTP(S) URL
    /// - retry or timeout settings are out of range
    /// - admin credentials are blank
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        let parsed = url::Url::parse(&self.facts_api_url)
            .with_context(|| format!("FACTS_API_URL is not a valid URL: '{}'", self.facts_api_url))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            anyhow::bail!(
                "FACTS_API_URL must use http or https, got '{}'",
                parsed.scheme()
            );
        }

        if self.upstream_timeout_seconds == 0 {
            anyhow::bail!("UPSTREAM_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.retry_max_attempts == 0 || self.retry_max_attempts > 10 {
            anyhow::bail!(
                "RETRY_MAX_ATTEMPTS must be between 1 and 10, got {}",
                self.retry_max_attempts
            );
        }

        if self.retry_base_delay_ms == 0 {
            anyhow::bail!("RETRY_BASE_DELAY_MS must be greater than 0");
        }

        if self.retry_multiplier < 1.0 {
            anyhow::bail!(
                "RETRY_MULTIPLIER must be at least 1.0, got {}",
                self.retry_multiplier
            );
        }

        if self.admin_username.trim().is_empty() {
            anyhow::bail!("ADMIN_USERNAME must not be blank");
        }
        if self.admin_password.trim().is_empty() {
            anyhow::bail!("ADMIN_PASSWORD must not be blank");
        }

        Ok(())
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Fact provider: {}", self.facts_api_url);
        tracing::info!(
            "  Upstream retry: {} attempts, {} ms base delay, x{} backoff",
            self.retry_max_attempts,
            self.retry_base_delay_ms,
            self.retry_multiplier
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Admin user: {}", self.admin_username);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
