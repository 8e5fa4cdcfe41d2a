//! Wire types for the MediaWiki search and parse endpoints.

use serde::Deserialize;

/// Top-level response of `action=query&list=search`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub query: SearchQuery,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub searchinfo: SearchInfo,
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
pub struct SearchInfo {
    pub totalhits: u64,
}

#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub title: String,
}

/// Top-level response of `action=parse&prop=wikitext&formatversion=2`.
///
/// With `formatversion=2` the wikitext arrives as a plain string rather
/// than the v1 `{"*": ...}` wrapper.
#[derive(Debug, Deserialize)]
pub struct ParseResponse {
    pub parse: ParsePayload,
}

#[derive(Debug, Deserialize)]
pub struct ParsePayload {
    pub wikitext: String,
}
