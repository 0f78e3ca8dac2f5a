use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid role '{value}': expected 'user' or 'admin' {location}")]
    InvalidRole {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid identity: {message} {location}")]
    InvalidIdentity {
        message: String,
        location: ErrorLocation,
    },

    #[error("Profile fetch failed for {user_id}: {message} {location}")]
    ProfileFetch {
        user_id: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Profile write failed for {user_id}: {message} {location}")]
    ProfileWrite {
        user_id: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Sign-out failed: {message} {location}")]
    SignOut {
        message: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn profile_fetch(user_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProfileFetch {
            user_id: user_id.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn profile_write(user_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProfileWrite {
            user_id: user_id.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn sign_out(message: impl Into<String>) -> Self {
        Self::SignOut {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether the session must be ended because of this error.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::InvalidIdentity { .. } | Self::ProfileFetch { .. } | Self::ProfileWrite { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
