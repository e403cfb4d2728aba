//! Integration tests for Tiffin.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p tiffin-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `filtering` - Category and search filtering against the fixture catalog
//! - `store_flow` - End-to-end store sessions: browse, cart, login, checkout

use chrono::{DateTime, TimeZone, Utc};
use tiffin_core::{ProductId, Role};
use tiffin_storefront::Catalog;
use tiffin_storefront::models::User;
use tiffin_storefront::store::CartProduct;

/// The fixture catalog under `fixtures/catalog.json`.
///
/// # Panics
///
/// Panics if the fixture is invalid; tests cannot run without it.
#[must_use]
#[allow(clippy::expect_used)]
pub fn fixture_catalog() -> Catalog {
    Catalog::from_json_str(include_str!("../fixtures/catalog.json"))
        .expect("fixture catalog is valid")
}

/// Cart data for a fixture product.
///
/// # Panics
///
/// Panics if `id` is not in the fixture catalog.
#[must_use]
#[allow(clippy::expect_used)]
pub fn fixture_product(catalog: &Catalog, id: i32) -> CartProduct {
    CartProduct::from_catalog(catalog, ProductId::new(id)).expect("product exists in fixture")
}

/// A user with the given role.
#[must_use]
pub fn user(name: &str, role: Role) -> User {
    User {
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        phone: "555-0100".to_string(),
        address: "1 Market Street".to_string(),
        role,
    }
}

/// A fixed timestamp for deterministic orders.
///
/// # Panics
///
/// Never; the date is valid.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn timestamp(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 14, hour, 0, 0).unwrap()
}
