use crate::AccountType;

use std::str::FromStr;

#[test]
fn test_account_type_as_str() {
    assert_eq!(AccountType::User.as_str(), "user");
    assert_eq!(AccountType::Admin.as_str(), "admin");
}

#[test]
fn test_account_type_from_str() {
    assert_eq!(AccountType::from_str("user").unwrap(), AccountType::User);
    assert_eq!(AccountType::from_str("admin").unwrap(), AccountType::Admin);
    assert!(AccountType::from_str("Admin").is_err());
    assert!(AccountType::from_str("superuser").is_err());
    assert!(AccountType::from_str("").is_err());
}

#[test]
fn test_account_type_default_is_user() {
    assert_eq!(AccountType::default(), AccountType::User);
}

#[test]
fn test_account_type_serializes_lowercase() {
    let json = serde_json::to_string(&AccountType::Admin).unwrap();
    assert_eq!(json, "\"admin\"");

    let parsed: AccountType = serde_json::from_str("\"user\"").unwrap();
    assert_eq!(parsed, AccountType::User);
}
