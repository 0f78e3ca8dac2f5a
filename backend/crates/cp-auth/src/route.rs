use cp_config::RoutesConfig;
use cp_core::AccountType;

use serde::Serialize;

/// Well-known destinations the gate can send the browser to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Route {
    SignIn,
    UserHome,
    AdminHome,
}

impl Route {
    /// Landing page for a role: admins go to the admin home, everyone else
    /// to the user home.
    pub fn home_for(account_type: AccountType) -> Self {
        match account_type {
            AccountType::Admin => Self::AdminHome,
            AccountType::User => Self::UserHome,
        }
    }
}

/// Maps routes to deployment-specific locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    sign_in: String,
    user_home: String,
    admin_home: String,
}

impl RouteTable {
    pub fn new(
        sign_in: impl Into<String>,
        user_home: impl Into<String>,
        admin_home: impl Into<String>,
    ) -> Self {
        Self {
            sign_in: sign_in.into(),
            user_home: user_home.into(),
            admin_home: admin_home.into(),
        }
    }

    pub fn location(&self, route: Route) -> &str {
        match route {
            Route::SignIn => &self.sign_in,
            Route::UserHome => &self.user_home,
            Route::AdminHome => &self.admin_home,
        }
    }
}

impl From<&RoutesConfig> for RouteTable {
    fn from(config: &RoutesConfig) -> Self {
        Self::new(&config.sign_in, &config.user_home, &config.admin_home)
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::from(&RoutesConfig::default())
    }
}
