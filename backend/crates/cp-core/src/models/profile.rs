//! Profile entity - the application record describing a user's role and
//! personal data, keyed 1:1 by identity id.

use crate::{AccountType, Address, Identity};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Identity id this profile belongs to
    pub user_id: String,
    pub account_type: AccountType,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub middle_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<Address>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Minimal profile for an identity that has none yet.
    ///
    /// Always a plain `user`; contact fields are copied from the identity
    /// when the provider knows them.
    pub fn default_for(identity: &Identity) -> Self {
        let now = Utc::now();
        Self {
            user_id: identity.id.clone(),
            account_type: AccountType::User,
            first_name: None,
            last_name: None,
            middle_name: None,
            email: identity.email.clone(),
            phone: identity.phone_number.clone(),
            address: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.account_type.is_admin()
    }

    /// Human-readable name: full name, else email, else phone, else the id.
    pub fn display_name(&self) -> String {
        let full_name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if !full_name.is_empty() {
            return full_name;
        }

        self.email
            .clone()
            .or_else(|| self.phone.clone())
            .unwrap_or_else(|| self.user_id.clone())
    }
}
