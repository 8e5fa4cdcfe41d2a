//! Configuration constants.
//!
//! This module defines the wiki API contract constants, the vocabulary of
//! the firmware keys template, and service defaults.

/// Default MediaWiki API endpoint queried for firmware keys pages.
///
/// Overridable via `--wiki-endpoint`, which also lets tests point the
/// client at a local mock server.
pub const DEFAULT_WIKI_ENDPOINT: &str = "https://theapplewiki.com/api.php";

/// MediaWiki content namespace holding the firmware keys pages.
///
/// Searches are restricted to this namespace so device pages, talk pages,
/// and redirects never shadow a keys page.
pub const FIRMWARE_KEYS_NAMESPACE: &str = "2304";

/// Default HTTP User-Agent header value.
///
/// Wiki operators expect API consumers to identify themselves. Users can
/// override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("wikiproxy/", env!("CARGO_PKG_VERSION"));

/// Default per-request timeout in seconds for wiki API calls.
///
/// The wiki contract defines no retry or backoff policy, so this client
/// timeout is the only deadline a lookup carries.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Default bind address for the HTTP service.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port for the HTTP service.
pub const DEFAULT_PORT: u16 = 8888;

/// Whole-page metadata fields of the keys template.
///
/// Every other field names either a component or component key material.
pub const PAGE_METADATA_KEYS: [&str; 7] = [
    "Version",
    "Build",
    "Device",
    "Model",
    "Codename",
    "Baseband",
    "DownloadURL",
];

/// Field-name suffixes marking key material (`<image>Key`, `<image>IV`,
/// `<image>KBAG`) rather than a component itself.
pub const KEY_MATERIAL_SUFFIXES: [&str; 3] = ["Key", "IV", "KBAG"];

/// Values the wiki puts in key-material fields when no real key is known.
///
/// Matched by substring; some pages annotate the placeholder with extra
/// text.
pub const PLACEHOLDER_VALUES: [&str; 2] = ["Unknown", "Not Encrypted"];

/// Components the wiki documents without their `.dmg` container extension.
pub const DMG_COMPONENTS: [&str; 3] = ["RootFS", "RestoreRamdisk", "UpdateRamdisk"];
