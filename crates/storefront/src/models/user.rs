//! Signed-in user profile and profile edits.

use serde::{Deserialize, Serialize};
use tiffin_core::{Email, EmailError, Role};

/// The signed-in user as shown on profile screens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub role: Role,
}

impl User {
    /// Merge the provided fields; `None` fields are left untouched.
    ///
    /// Returns `true` if any field changed.
    pub fn apply(&mut self, update: ProfileUpdate) -> bool {
        let mut changed = false;
        for (field, value) in [
            (&mut self.name, update.name),
            (&mut self.email, update.email),
            (&mut self.phone, update.phone),
            (&mut self.address, update.address),
        ] {
            if let Some(value) = value
                && *field != value
            {
                *field = value;
                changed = true;
            }
        }
        changed
    }
}

/// A partial profile edit. The auth slice applies it as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Why a profile form cannot be saved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("name cannot be empty")]
    EmptyName,
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
}

/// Raw edit-profile form contents, validated before dispatch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl ProfileForm {
    /// Pre-fill the form from the current user.
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone(),
            address: user.address.clone(),
        }
    }

    /// Check the form and turn it into a [`ProfileUpdate`].
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::EmptyName`] for a blank name and
    /// [`ProfileError::InvalidEmail`] if the email does not parse.
    pub fn validate(self) -> Result<ProfileUpdate, ProfileError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ProfileError::EmptyName);
        }
        let email = Email::parse(&self.email)?;

        Ok(ProfileUpdate {
            name: Some(name.to_string()),
            email: Some(email.into_inner()),
            phone: Some(self.phone.trim().to_string()),
            address: Some(self.address.trim().to_string()),
        })
    }
}
