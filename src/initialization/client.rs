//! HTTP client initialization.

use std::sync::Arc;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the shared HTTP client for wiki API calls.
///
/// Creates a `reqwest::Client` configured with:
/// - User-Agent header from the configuration
/// - Per-request timeout from the configuration
/// - Rustls TLS backend
///
/// The timeout is the only deadline a lookup carries; the wiki API
/// contract defines no retry or backoff policy, so a timed-out call is a
/// terminal failure for that lookup.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<Arc<reqwest::Client>, reqwest::Error> {
    let client = ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(Arc::new(client))
}
