//! Tiffin Core - Shared types library.
//!
//! This crate provides common types used across all Tiffin components:
//! - `storefront` - Client-side state: catalog, filters, cart, auth, toast, orders
//! - `cli` - Command-line tools for browsing catalogs and replaying action scripts
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no logging,
//! no global state. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, emails, roles and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
