//! Identity - the authentication principal issued by the identity provider.

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// An authenticated principal.
///
/// Identities are created and destroyed by the external identity provider.
/// The portal only reads them (and may end the session on failure).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Provider-issued unique id, also the profile key
    pub id: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub email_verified: bool,
}

impl Identity {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: None,
            phone_number: None,
            email_verified: false,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    pub fn with_email_verified(mut self, verified: bool) -> Self {
        self.email_verified = verified;
        self
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.id.trim().is_empty() {
            return Err(CoreError::Validation {
                message: "identity id cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
