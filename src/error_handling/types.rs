//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors raised while resolving firmware keys for a device/build pair.
///
/// The lookup pipeline performs no retries; each variant is terminal for
/// the request that raised it. `PageNotFound` is the expected outcome for
/// device/build combinations the wiki does not document, and is kept
/// separate from the transport variants so callers can tell them apart.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The wiki API answered with a non-success status code.
    #[error("wiki API request failed with status {status}")]
    BadStatus {
        /// HTTP status observed on the failing call.
        status: StatusCode,
    },

    /// The wiki API could not be reached or its response could not be read.
    #[error("wiki API request failed: {0}")]
    Request(#[from] ReqwestError),

    /// No firmware keys page matched the device/build search.
    #[error("no firmware keys page for device {identifier}, build {build_id}")]
    PageNotFound {
        /// Device identifier the search was issued for.
        identifier: String,
        /// Build identifier the search was issued for.
        build_id: String,
    },

    /// The supplied board configuration matches nothing on the page.
    #[error("board config {board_config} for device {identifier} is not valid")]
    InvalidBoardConfig {
        /// Device identifier the lookup was issued for.
        identifier: String,
        /// Board configuration that failed to match.
        board_config: String,
    },

    /// The fetched markup contains no keys template block at all.
    ///
    /// Distinct from a present-but-empty template, which parses to an
    /// empty field table and an all-default record.
    #[error("page markup contains no keys template block")]
    MalformedPage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_error_messages_name_their_inputs() {
        let err = LookupError::PageNotFound {
            identifier: "iPhone10,6".into(),
            build_id: "20G81".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("iPhone10,6"));
        assert!(msg.contains("20G81"));

        let err = LookupError::InvalidBoardConfig {
            identifier: "iPhone10,6".into(),
            board_config: "d221ap".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("iPhone10,6"));
        assert!(msg.contains("d221ap"));
    }

    #[test]
    fn test_bad_status_message_carries_status() {
        let err = LookupError::BadStatus {
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        assert!(err.to_string().contains("503"));
    }
}
