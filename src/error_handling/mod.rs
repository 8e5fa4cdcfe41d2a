//! Error handling.
//!
//! This module provides the error taxonomy of the service:
//! - **Initialization errors**: logger or HTTP client setup failures that
//!   abort startup
//! - **Lookup errors**: typed, non-retried failures of the key resolution
//!   pipeline (transport, missing page, invalid board config, unparsable
//!   markup)

mod types;

// Re-export public API
pub use types::{InitializationError, LookupError};
