pub mod account_type;
pub mod address;
pub mod identity;
pub mod profile;
pub mod profile_update;
