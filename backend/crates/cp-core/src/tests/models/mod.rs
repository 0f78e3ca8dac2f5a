mod account_type;
mod identity;
mod profile;
mod profile_update;
