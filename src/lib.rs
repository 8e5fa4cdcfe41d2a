//! wikiproxy library: firmware key lookup against The Apple Wiki.
//!
//! This library resolves per-component firmware decryption metadata (AES
//! keys, initialization vectors, key bags) for Apple devices. A lookup
//! locates the wiki page documenting a device/build pair via the
//! MediaWiki search API, fetches that page's raw template markup, and
//! derives a typed [`FirmwareKeyRecord`] from it, optionally narrowed to
//! one board configuration on pages documenting two hardware variants.
//!
//! # Example
//!
//! ```no_run
//! use wikiproxy::{lookup_keys, Config};
//! use wikiproxy::initialization::init_client;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::default();
//! let client = init_client(&config)?;
//!
//! let record = lookup_keys(&client, &config.wiki_endpoint, "iPhone10,6", "20G81", None).await?;
//! println!("{} components with key material", record.components.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod config;
mod error_handling;
pub mod initialization;
mod models;
mod parse;
mod server;
mod wiki;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use error_handling::{InitializationError, LookupError};
pub use models::{ComponentKey, FirmwareKeyRecord};
pub use server::run_server;
pub use wiki::{fetch_page_markup, locate_key_page, lookup_keys};
