use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortalError {
    #[error("Config error: {0}")]
    Config(#[from] cp_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] cp_db::DbError),

    #[error("Auth error: {0}")]
    Auth(#[from] cp_auth::AuthError),

    #[error("Invalid input: {0}")]
    Core(#[from] cp_core::CoreError),

    #[error("No profile for {user_id} {location}")]
    ProfileNotFound {
        user_id: String,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl PortalError {
    #[track_caller]
    pub fn profile_not_found(user_id: impl Into<String>) -> Self {
        Self::ProfileNotFound {
            user_id: user_id.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, PortalError>;
