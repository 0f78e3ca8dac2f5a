use cp_core::{AccountType, Address, Identity, Profile};

use chrono::{Duration, Utc};

/// Self-heal style profile for a bare identity
pub fn create_default_profile(user_id: &str) -> Profile {
    Profile::default_for(&Identity::new(user_id).with_email(format!("{user_id}@example.com")))
}

/// Fully populated profile as written by signup
pub fn create_signup_profile(user_id: &str, account_type: AccountType) -> Profile {
    let mut profile = create_default_profile(user_id);
    profile.account_type = account_type;
    profile.first_name = Some("Juan".to_string());
    profile.last_name = Some("Dela Cruz".to_string());
    profile.middle_name = Some("Santos".to_string());
    profile.address = Some(Address {
        house_number: Some("12".to_string()),
        street: Some("Mabini St.".to_string()),
    });
    profile
}

/// Profile created `seconds_ago` seconds in the past
pub fn create_profile_at(user_id: &str, account_type: AccountType, seconds_ago: i64) -> Profile {
    let mut profile = create_default_profile(user_id);
    let created = Utc::now() - Duration::seconds(seconds_ago);
    profile.account_type = account_type;
    profile.created_at = created;
    profile.updated_at = created;
    profile
}
