mod config;
mod database_config;
mod error;
mod gate_config;
mod log_level;
mod logging_config;
mod routes_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use gate_config::GateConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use routes_config::RoutesConfig;

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "CP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".cp";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "portal.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_SIGN_IN_ROUTE: &str = "login.html";
const DEFAULT_USER_HOME_ROUTE: &str = "index.html";
const DEFAULT_ADMIN_HOME_ROUTE: &str = "admin.html";

const DEFAULT_LOGOUT_TRIGGER_IDS: [&str; 2] = ["logout-button", "logout-button-alt"];
const DEFAULT_READY_CHANNEL_CAPACITY: usize = 16;
const MAX_READY_CHANNEL_CAPACITY: usize = 1024;
