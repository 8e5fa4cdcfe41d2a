//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument
//! parsing and configuration.

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_HOST, DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT, DEFAULT_WIKI_ENDPOINT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Service configuration.
///
/// Parsed from the command line by the binary; library users can construct
/// it programmatically via `Default` and struct update syntax.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "wikiproxy",
    version,
    about = "Firmware key lookup service backed by The Apple Wiki"
)]
pub struct Config {
    /// Address to bind the HTTP service to
    #[arg(long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Port to bind the HTTP service to
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// MediaWiki API endpoint to query for firmware keys pages
    #[arg(long, default_value = DEFAULT_WIKI_ENDPOINT)]
    pub wiki_endpoint: String,

    /// Per-request timeout in seconds for wiki API calls
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            wiki_endpoint: DEFAULT_WIKI_ENDPOINT.to_string(),
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.wiki_endpoint, DEFAULT_WIKI_ENDPOINT);
        assert!(config.user_agent.starts_with("wikiproxy/"));
    }

    #[test]
    fn test_config_parses_overrides() {
        let config = Config::parse_from([
            "wikiproxy",
            "--port",
            "9000",
            "--wiki-endpoint",
            "http://127.0.0.1:8080/api.php",
            "--log-level",
            "debug",
        ]);
        assert_eq!(config.port, 9000);
        assert_eq!(config.wiki_endpoint, "http://127.0.0.1:8080/api.php");
        assert!(matches!(config.log_level, LogLevel::Debug));
    }
}
