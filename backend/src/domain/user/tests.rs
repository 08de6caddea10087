//! Tests for the domain user model.

use super::*;
use rstest::rstest;
use serde_json::json;

#[rstest]
#[case("", UserValidationError::EmptyUsername)]
#[case("   ", UserValidationError::EmptyUsername)]
#[case(" kim", UserValidationError::UntrimmedUsername)]
#[case("kim/notes", UserValidationError::UsernameContainsSlash)]
fn username_rejects_invalid_input(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(Username::new(raw), Err(expected));
}

#[rstest]
#[case("kim")]
#[case("ada_lovelace")]
#[case("röntgen")]
fn username_accepts_handles(#[case] raw: &str) {
    let username = Username::new(raw).expect("valid username");
    assert_eq!(username.to_string(), raw);
}

#[rstest]
fn display_label_prefers_name() {
    let user = User::try_from_parts("kim", Some("Kim Lee".to_owned())).expect("valid user");
    assert_eq!(user.display_label(), "Kim Lee");
}

#[rstest]
fn display_label_falls_back_to_username() {
    let user = User::try_from_parts("kim", None).expect("valid user");
    assert_eq!(user.display_label(), "kim");
}

#[rstest]
fn user_serialises_as_flat_object() {
    let user = User::try_from_parts("kim", None).expect("valid user");
    let value = serde_json::to_value(&user).expect("serialise");
    assert_eq!(value, json!({ "username": "kim", "name": null }));
}

#[rstest]
fn user_deserialisation_validates_username() {
    let result = serde_json::from_value::<User>(json!({ "username": "", "name": null }));
    assert!(result.is_err());
}
