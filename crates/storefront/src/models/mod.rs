//! Domain models for the storefront state.

pub mod user;

pub use user::{ProfileError, ProfileForm, ProfileUpdate, User};
