use crate::{AuthError, Result as AuthErrorResult};

use cp_core::AccountType;

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// Options a page passes to `protect_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProtectOptions {
    /// Role allowed to see the page; `user` when not given
    pub expected_role: AccountType,
}

impl ProtectOptions {
    pub fn new(expected_role: AccountType) -> Self {
        Self { expected_role }
    }

    /// Parse a page-declared role. Absent means `user`; only `user` and
    /// `admin` are accepted.
    #[track_caller]
    pub fn parse(expected_role: Option<&str>) -> AuthErrorResult<Self> {
        let Some(value) = expected_role else {
            return Ok(Self::default());
        };

        let location = Location::caller();
        AccountType::from_str(value)
            .map(Self::new)
            .map_err(|_| AuthError::InvalidRole {
                value: value.to_string(),
                location: ErrorLocation::from(location),
            })
    }
}
