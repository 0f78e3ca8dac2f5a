pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::account_type::AccountType;
pub use models::address::Address;
pub use models::identity::Identity;
pub use models::profile::Profile;
pub use models::profile_update::ProfileUpdate;

#[cfg(test)]
mod tests;
