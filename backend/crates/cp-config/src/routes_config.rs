use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ADMIN_HOME_ROUTE, DEFAULT_SIGN_IN_ROUTE,
    DEFAULT_USER_HOME_ROUTE,
};

use serde::Deserialize;

/// The three well-known locations the session gate redirects to.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RoutesConfig {
    pub sign_in: String,
    pub user_home: String,
    pub admin_home: String,
}

impl Default for RoutesConfig {
    fn default() -> Self {
        Self {
            sign_in: String::from(DEFAULT_SIGN_IN_ROUTE),
            user_home: String::from(DEFAULT_USER_HOME_ROUTE),
            admin_home: String::from(DEFAULT_ADMIN_HOME_ROUTE),
        }
    }
}

impl RoutesConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        for (name, value) in [
            ("sign_in", &self.sign_in),
            ("user_home", &self.user_home),
            ("admin_home", &self.admin_home),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::routes(format!(
                    "routes.{name} cannot be empty"
                )));
            }
        }

        // A role home that equals sign-in would bounce forever
        if self.sign_in == self.user_home
            || self.sign_in == self.admin_home
            || self.user_home == self.admin_home
        {
            return Err(ConfigError::routes(
                "routes.sign_in, routes.user_home and routes.admin_home must be distinct",
            ));
        }

        Ok(())
    }
}
