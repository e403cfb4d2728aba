//! Unified error handling.
//!
//! Store and filter operations never fail. Errors only arise at the edges:
//! loading configuration, loading a catalog, and parsing action scripts.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::models::ProfileError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Profile form failed validation.
    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    /// Reading an input file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An action script or snapshot was not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
