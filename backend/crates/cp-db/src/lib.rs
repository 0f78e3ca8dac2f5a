pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::{MIGRATOR, connect, connect_in_memory};
pub use error::{DbError, Result};
pub use repositories::profile_repository::ProfileRepository;

/// Collection (table) holding one profile per identity.
pub const USERS_COLLECTION: &str = "users";
