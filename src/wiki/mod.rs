//! Wiki page location, retrieval, and the lookup pipeline.
//!
//! Two sequential API calls against a MediaWiki endpoint: a
//! namespace-restricted title search, then a raw-wikitext fetch for the
//! resolved title. The second call depends on the title from the first, so
//! there is no parallelism; neither call is retried.

mod types;

use log::debug;
use reqwest::Client;

use crate::config::FIRMWARE_KEYS_NAMESPACE;
use crate::error_handling::LookupError;
use crate::models::FirmwareKeyRecord;
use crate::parse::{derive_record, parse_fields, select_board_config};
use types::{ParseResponse, SearchResponse};

/// Resolves the title of the firmware keys page for a device/build pair.
///
/// Issues `action=query&list=search` with `intitle:<identifier> <build_id>`
/// restricted to the firmware keys namespace, result limit 1, and returns
/// the top hit's title.
///
/// # Errors
///
/// [`LookupError::BadStatus`] or [`LookupError::Request`] on transport
/// failures, [`LookupError::PageNotFound`] when the search has no hits.
pub async fn locate_key_page(
    client: &Client,
    endpoint: &str,
    identifier: &str,
    build_id: &str,
) -> Result<String, LookupError> {
    let response = client
        .get(endpoint)
        .query(&[
            ("action", "query"),
            ("list", "search"),
            ("srsearch", &format!("intitle:{identifier} {build_id}")),
            ("srnamespace", FIRMWARE_KEYS_NAMESPACE),
            ("srlimit", "1"),
            ("format", "json"),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(LookupError::BadStatus {
            status: response.status(),
        });
    }

    let search: SearchResponse = response.json().await?;
    if search.query.searchinfo.totalhits == 0 {
        return Err(LookupError::PageNotFound {
            identifier: identifier.to_string(),
            build_id: build_id.to_string(),
        });
    }

    search
        .query
        .search
        .into_iter()
        .next()
        .map(|hit| hit.title)
        .ok_or_else(|| LookupError::PageNotFound {
            identifier: identifier.to_string(),
            build_id: build_id.to_string(),
        })
}

/// Fetches the raw template markup of a page by exact title.
///
/// Issues `action=parse&prop=wikitext&formatversion=2` and returns the
/// source wikitext, not rendered HTML.
///
/// # Errors
///
/// [`LookupError::BadStatus`] or [`LookupError::Request`] on transport
/// failures.
pub async fn fetch_page_markup(
    client: &Client,
    endpoint: &str,
    title: &str,
) -> Result<String, LookupError> {
    let response = client
        .get(endpoint)
        .query(&[
            ("action", "parse"),
            ("prop", "wikitext"),
            ("page", title),
            ("format", "json"),
            ("formatversion", "2"),
        ])
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(LookupError::BadStatus {
            status: response.status(),
        });
    }

    let parsed: ParseResponse = response.json().await?;
    Ok(parsed.parse.wikitext)
}

/// Resolves the firmware key record for a device/build pair.
///
/// The single entry point of the lookup pipeline: locate the keys page,
/// fetch its markup, normalize the template into a field table, narrow to
/// the requested board configuration when one is supplied, and derive the
/// typed record. Errors propagate typed and untouched; there is no retry
/// and no partial recovery.
pub async fn lookup_keys(
    client: &Client,
    endpoint: &str,
    identifier: &str,
    build_id: &str,
    board_config: Option<&str>,
) -> Result<FirmwareKeyRecord, LookupError> {
    let title = locate_key_page(client, endpoint, identifier, build_id).await?;
    debug!("Resolved keys page '{title}' for {identifier} {build_id}");

    let markup = fetch_page_markup(client, endpoint, &title).await?;

    let mut fields = parse_fields(&markup)?;
    if let Some(board_config) = board_config {
        fields = select_board_config(fields, identifier, board_config)?;
    }

    Ok(derive_record(&fields, identifier))
}
