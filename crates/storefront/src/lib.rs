//! Tiffin Storefront - client-side state for the food-delivery app.
//!
//! The crate is the state core behind the app's screens:
//!
//! - [`catalog`] - the read-only restaurant and menu catalog
//! - [`filter`] - category and search filtering for the home screen
//! - [`store`] - the injectable [`Store`](store::Store) with cart, auth, toast
//!   and orders slices
//! - [`views`] - preformatted display data
//! - [`config`] - environment configuration for hosts
//!
//! Nothing here performs I/O except catalog and configuration loading, and
//! no store or filter operation can fail.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod models;
pub mod store;
pub mod views;

pub use catalog::{Catalog, CatalogError, MenuItem, Restaurant};
pub use error::{AppError, Result};
pub use filter::{BrowseSession, CategoryRules, FilterSelection, filter_by_category, filter_by_search};
pub use store::{Action, Store, StoreState};
