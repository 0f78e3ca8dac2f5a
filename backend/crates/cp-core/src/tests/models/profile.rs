use crate::{AccountType, Identity, Profile};

use googletest::prelude::*;

#[test]
fn given_identity_with_contact_when_default_profile_then_copies_contact_and_is_user() {
    let identity = Identity::new("42")
        .with_email("maria@example.com")
        .with_phone_number("+639170000000");

    let profile = Profile::default_for(&identity);

    assert_that!(profile.user_id.as_str(), eq("42"));
    assert_that!(profile.account_type, eq(AccountType::User));
    assert_that!(profile.email.as_deref(), some(eq("maria@example.com")));
    assert_that!(profile.phone.as_deref(), some(eq("+639170000000")));
    assert_that!(profile.first_name.as_deref(), none());
    assert_that!(profile.address.as_ref(), none());
    assert_that!(profile.created_at, eq(profile.updated_at));
}

#[test]
fn given_bare_identity_when_default_profile_then_contact_is_absent() {
    let profile = Profile::default_for(&Identity::new("7"));

    assert_that!(profile.email.as_deref(), none());
    assert_that!(profile.phone.as_deref(), none());
    assert!(!profile.is_admin());
}

#[test]
fn test_display_name_prefers_full_name() {
    let mut profile = Profile::default_for(&Identity::new("1").with_email("a@example.com"));
    profile.first_name = Some("Jose".to_string());
    profile.last_name = Some("Rizal".to_string());

    assert_eq!(profile.display_name(), "Jose Rizal");
}

#[test]
fn test_display_name_falls_back_to_email_then_phone_then_id() {
    let mut profile = Profile::default_for(&Identity::new("1").with_email("a@example.com"));
    assert_eq!(profile.display_name(), "a@example.com");

    profile.email = None;
    profile.phone = Some("+63917".to_string());
    assert_eq!(profile.display_name(), "+63917");

    profile.phone = None;
    profile.first_name = Some("  ".to_string());
    assert_eq!(profile.display_name(), "1");
}
