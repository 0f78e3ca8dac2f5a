use crate::{Address, ProfileUpdate};

#[test]
fn test_default_update_is_empty() {
    assert!(ProfileUpdate::default().is_empty());
}

#[test]
fn test_update_with_blank_address_is_empty() {
    let update = ProfileUpdate {
        address: Some(Address::default()),
        ..Default::default()
    };

    assert!(update.is_empty());
}

#[test]
fn test_update_with_name_is_not_empty() {
    let update = ProfileUpdate {
        first_name: Some("Andres".to_string()),
        ..Default::default()
    };

    assert!(!update.is_empty());
}
