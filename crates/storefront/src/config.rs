//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TIFFIN_CATALOG_PATH` - JSON catalog to load (default: the host's bundled catalog)
//! - `TIFFIN_CURRENCY_SYMBOL` - Prefix for displayed prices (default: `$`)
//! - `TIFFIN_LOG_FORMAT` - `pretty` or `json` (default: `pretty`)

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

const DEFAULT_CURRENCY_SYMBOL: &str = "$";
const MAX_CURRENCY_SYMBOL_CHARS: usize = 4;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected 'pretty' or 'json', got '{other}'")),
        }
    }
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Catalog file to load instead of the bundled one
    pub catalog_path: Option<PathBuf>,
    /// Symbol prefixed to prices and totals
    pub currency_symbol: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            log_format: LogFormat::default(),
        }
    }
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
        Self::from_lookup(get_optional_env)
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let catalog_path = lookup("TIFFIN_CATALOG_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let currency_symbol = lookup("TIFFIN_CURRENCY_SYMBOL")
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOL.to_string());
        validate_currency_symbol(&currency_symbol)?;

        let log_format = lookup("TIFFIN_LOG_FORMAT")
            .map(|v| v.parse::<LogFormat>())
            .transpose()
            .map_err(|e| ConfigError::InvalidEnvVar("TIFFIN_LOG_FORMAT".to_string(), e))?
            .unwrap_or_default();

        Ok(Self {
            catalog_path,
            currency_symbol,
            log_format,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn validate_currency_symbol(symbol: &str) -> Result<(), ConfigError> {
    let chars = symbol.chars().count();
    if symbol.trim().is_empty() || chars > MAX_CURRENCY_SYMBOL_CHARS {
        return Err(ConfigError::InvalidEnvVar(
            "TIFFIN_CURRENCY_SYMBOL".to_string(),
            format!("must be 1-{MAX_CURRENCY_SYMBOL_CHARS} non-blank characters"),
        ));
    }
    Ok(())
}
