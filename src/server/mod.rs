//! HTTP service exposing the firmware key lookup.
//!
//! Provides one endpoint:
//! - `GET /firmware/{identifier}/{buildid}` (optional `?boardconfig=...`) -
//!   JSON firmware key record
//!
//! Lookup failures degrade to a well-formed 200 response carrying the
//! error message and an empty record, so clients always parse one shape;
//! only a malformed device identifier is rejected outright.

use std::sync::{Arc, LazyLock};

use anyhow::Context;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::initialization::init_client;
use crate::models::FirmwareKeyRecord;
use crate::wiki::lookup_keys;

/// Device identifiers the wiki documents (e.g. `iPhone10,6`).
static DEVICE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(iPhone|AppleTV|iPad|iPod)[0-9]+,[0-9]+$").unwrap());

/// Shared state for the lookup service.
#[derive(Clone)]
pub struct AppState {
    /// HTTP client shared by all lookups (connection pool).
    pub client: Arc<reqwest::Client>,
    /// MediaWiki API endpoint to query.
    pub wiki_endpoint: String,
}

/// Optional query parameters of the lookup endpoint.
#[derive(Debug, Deserialize)]
pub struct LookupParams {
    /// Board configuration narrowing two-variant pages.
    pub boardconfig: Option<String>,
}

/// JSON body returned by the lookup endpoint.
///
/// `error` is present only on degraded responses; the record fields are
/// flattened alongside it so both shapes parse uniformly.
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    /// Human-readable failure description, absent on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// The resolved record, or an empty echo of the request on failure.
    #[serde(flatten)]
    pub record: FirmwareKeyRecord,
}

/// Runs the lookup service with the provided configuration.
///
/// Initializes the shared HTTP client and serves until the process is
/// stopped or the listener fails.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built or the listener
/// cannot bind.
pub async fn run_server(config: Config) -> Result<(), anyhow::Error> {
    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    start_server(&config, client).await
}

/// Creates and starts the lookup server.
pub async fn start_server(
    config: &Config,
    client: Arc<reqwest::Client>,
) -> Result<(), anyhow::Error> {
    let state = AppState {
        client,
        wiki_endpoint: config.wiki_endpoint.clone(),
    };
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port))
        .await
        .map_err(|e| {
            anyhow::anyhow!(
                "Failed to bind lookup server to {}:{}: {}",
                config.host,
                config.port,
                e
            )
        })?;

    log::info!(
        "Firmware key service listening on http://{}:{}/",
        config.host,
        config.port
    );
    log::info!("Querying wiki endpoint {}", config.wiki_endpoint);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Lookup server error: {}", e))?;

    Ok(())
}

/// Builds the service router; separate from [`start_server`] for tests.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/firmware/{identifier}/{buildid}",
            get(firmware_keys_handler),
        )
        .with_state(state)
}

/// Lookup endpoint handler.
async fn firmware_keys_handler(
    State(state): State<AppState>,
    Path((identifier, build_id)): Path<(String, String)>,
    Query(params): Query<LookupParams>,
) -> Response {
    if !DEVICE_PATTERN.is_match(&identifier) {
        let body = serde_json::json!({
            "error": format!("{identifier} is not a valid device identifier"),
        });
        return (StatusCode::BAD_REQUEST, Json(body)).into_response();
    }

    let board_config = params.boardconfig.as_deref();
    match lookup_keys(
        &state.client,
        &state.wiki_endpoint,
        &identifier,
        &build_id,
        board_config,
    )
    .await
    {
        Ok(record) => Json(LookupResponse {
            error: None,
            record,
        })
        .into_response(),
        Err(e) => {
            log::warn!("Lookup failed for {identifier} {build_id}: {e}");
            Json(LookupResponse {
                error: Some(e.to_string()),
                record: FirmwareKeyRecord::empty(&identifier, &build_id),
            })
            .into_response()
        }
    }
}
