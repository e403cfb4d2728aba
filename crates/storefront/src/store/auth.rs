//! Auth slice.
//!
//! Logout clears the stored user so profile screens cannot show a previous
//! user's details after sign-out.

use serde::{Deserialize, Serialize};
use tiffin_core::Role;

use crate::models::{ProfileUpdate, User};

/// Signed-in flag and user. A stored user is present exactly when signed in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "AuthSnapshot")]
pub struct AuthState {
    is_authenticated: bool,
    user: Option<User>,
}

#[derive(Deserialize)]
struct AuthSnapshot {
    #[serde(default)]
    is_authenticated: bool,
    #[serde(default)]
    user: Option<User>,
}

impl From<AuthSnapshot> for AuthState {
    fn from(snapshot: AuthSnapshot) -> Self {
        match snapshot.user {
            Some(user) if snapshot.is_authenticated => Self {
                is_authenticated: true,
                user: Some(user),
            },
            _ => Self::default(),
        }
    }
}

impl AuthState {
    /// Mark `user` as signed in, replacing any previous user.
    pub fn login(&mut self, user: User) -> bool {
        if self.is_authenticated && self.user.as_ref() == Some(&user) {
            return false;
        }
        self.is_authenticated = true;
        self.user = Some(user);
        true
    }

    /// Sign out and forget the user.
    pub fn logout(&mut self) -> bool {
        if !self.is_authenticated && self.user.is_none() {
            return false;
        }
        self.is_authenticated = false;
        self.user = None;
        true
    }

    /// Merge profile fields into the signed-in user.
    ///
    /// Values are applied as given; ignored when nobody is signed in.
    pub fn update_profile(&mut self, update: ProfileUpdate) -> bool {
        self.user.as_mut().is_some_and(|user| user.apply(update))
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Role of the signed-in user.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}
