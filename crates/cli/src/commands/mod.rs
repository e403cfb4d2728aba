//! CLI subcommands.

pub mod browse;
pub mod replay;

use std::path::Path;

use tiffin_storefront::config::StorefrontConfig;
use tiffin_storefront::{Catalog, CatalogError};

/// Catalog shipped with the binary.
const BUNDLED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Load the catalog from the CLI flag, then `TIFFIN_CATALOG_PATH`, then the
/// bundled file.
///
/// # Errors
///
/// Returns a [`CatalogError`] if the chosen catalog cannot be read or is invalid.
pub fn load_catalog(
    flag: Option<&Path>,
    config: &StorefrontConfig,
) -> Result<Catalog, CatalogError> {
    match flag.or(config.catalog_path.as_deref()) {
        Some(path) => Catalog::from_path(path),
        None => {
            tracing::debug!("Using bundled catalog");
            Catalog::from_json_str(BUNDLED_CATALOG)
        }
    }
}
