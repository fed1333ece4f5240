//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `SPORTSHOP_DATA_DIR` - Directory for the key-value store (default: `.sportshop`)
//! - `SPORTSHOP_COUNTRIES_URL` - Country list endpoint (default: restcountries.com)
//! - `SPORTSHOP_COUNTRIES_TIMEOUT_SECS` - Country fetch timeout (default: 5)
//! - `SPORTSHOP_SPEECH` - `on` or `off` (default: on)
//! - `SPORTSHOP_LOG_FORMAT` - `text` or `json` (default: text)

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use url::Url;

pub const DEFAULT_DATA_DIR: &str = ".sportshop";
pub const DEFAULT_COUNTRIES_URL: &str = "https://restcountries.com/v3.1/all?fields=name";
const DEFAULT_COUNTRIES_TIMEOUT_SECS: &str = "5";

/// `EnvFilter` directive used when `RUST_LOG` is unset. Spoken utterances
/// are logged under `sportshop_storefront::speech`, so this lets them through.
pub const DEFAULT_LOG_FILTER: &str = "sportshop_storefront=info,sportshop_cli=info";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("expected text or json, got {other}")),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Directory holding the key-value store files
    pub data_dir: PathBuf,
    /// Country list enrichment
    pub countries: CountriesConfig,
    /// Whether utterances are emitted at all
    pub speech_enabled: bool,
    /// Log output format
    pub log_format: LogFormat,
}

/// Country list endpoint configuration.
#[derive(Debug, Clone)]
pub struct CountriesConfig {
    /// Endpoint returning `[{ "name": { "common": ... } }]`
    pub url: Url,
    /// Request timeout
    pub timeout: Duration,
    /// Skip the fetch and use the fallback list
    pub offline: bool,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or_default =
            |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let data_dir = PathBuf::from(get_or_default("SPORTSHOP_DATA_DIR", DEFAULT_DATA_DIR));

        let url = parse_var(
            "SPORTSHOP_COUNTRIES_URL",
            &get_or_default("SPORTSHOP_COUNTRIES_URL", DEFAULT_COUNTRIES_URL),
            |v| Url::parse(v).map_err(|e| e.to_string()),
        )?;
        let timeout_secs = parse_var(
            "SPORTSHOP_COUNTRIES_TIMEOUT_SECS",
            &get_or_default(
                "SPORTSHOP_COUNTRIES_TIMEOUT_SECS",
                DEFAULT_COUNTRIES_TIMEOUT_SECS,
            ),
            |v| v.trim().parse::<u64>().map_err(|e| e.to_string()),
        )?;
        let speech_enabled = parse_var(
            "SPORTSHOP_SPEECH",
            &get_or_default("SPORTSHOP_SPEECH", "on"),
            parse_switch,
        )?;
        let log_format = parse_var(
            "SPORTSHOP_LOG_FORMAT",
            &get_or_default("SPORTSHOP_LOG_FORMAT", "text"),
            LogFormat::from_str,
        )?;

        Ok(Self {
            data_dir,
            countries: CountriesConfig {
                url,
                timeout: Duration::from_secs(timeout_secs),
                offline: false,
            },
            speech_enabled,
            log_format,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse a variable's value, naming the variable in the error.
fn parse_var<T>(
    key: &str,
    value: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<T, ConfigError> {
    parse(value).map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e))
}

/// Parse an on/off switch.
fn parse_switch(value: &str) -> Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Ok(true),
        "off" | "false" | "0" | "no" => Ok(false),
        other => Err(format!("expected on or off, got {other}")),
    }
}
