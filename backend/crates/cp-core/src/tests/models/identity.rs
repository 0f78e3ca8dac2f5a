use crate::{CoreError, Identity};

use googletest::prelude::*;

#[test]
fn given_builder_calls_when_identity_built_then_fields_are_set() {
    let identity = Identity::new("42")
        .with_email("juan@example.com")
        .with_phone_number("+639171234567")
        .with_email_verified(true);

    assert_that!(identity.id.as_str(), eq("42"));
    assert_that!(identity.email.as_deref(), some(eq("juan@example.com")));
    assert_that!(identity.phone_number.as_deref(), some(eq("+639171234567")));
    assert_that!(identity.email_verified, eq(true));
}

#[test]
fn given_blank_id_when_validated_then_returns_validation_error() {
    let identity = Identity::new("   ");

    let result = identity.validate();

    assert!(matches!(result, Err(CoreError::Validation { .. })));
}

#[test]
fn given_non_empty_id_when_validated_then_ok() {
    assert_that!(Identity::new("7").validate(), ok(anything()));
}
