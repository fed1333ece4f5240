//! Integration tests for registration and profile persistence.
//!
//! Profiles are written through a real `FileStore` in a temporary directory,
//! then read back by a fresh session as a returning shopper would see them.

#![allow(clippy::unwrap_used)]

use sportshop_core::{Brand, Catalog, Sport, ValidationError};
use sportshop_integration_tests::{RecordingSpeaker, today, valid_form};
use sportshop_storefront::session::REGISTRATION_PROMPT;
use sportshop_storefront::{
    FileStore, KeyValueStore, PROFILE_KEY, RegisterError, StorageError, Storefront,
};

fn open(dir: &std::path::Path) -> Storefront<FileStore, RecordingSpeaker> {
    Storefront::open(
        Catalog::builtin(),
        FileStore::new(dir),
        RecordingSpeaker::default(),
    )
    .unwrap()
}

// =============================================================================
// Returning shoppers
// =============================================================================

#[test]
fn test_profile_survives_restart() {
    let dir = tempfile::tempdir().unwrap();

    let mut first = open(dir.path());
    assert_eq!(first.speaker().last(), REGISTRATION_PROMPT);
    first.register(&valid_form(), today()).unwrap();
    drop(first);

    let second = open(dir.path());
    assert_eq!(
        second.speaker().last(),
        "Welcome back Jordan. Here are your recommendations."
    );
    let profile = second.profile().unwrap();
    assert_eq!(profile.country, "Canada");
    assert!(profile.prefers_brand(Brand::Nike));
    assert!(profile.prefers_sport(Sport::Running));
    assert!(second.filters().selected_brands().contains(&Brand::Nike));
}

#[test]
fn test_stored_record_layout() {
    let dir = tempfile::tempdir().unwrap();
    open(dir.path()).register(&valid_form(), today()).unwrap();

    let raw = std::fs::read_to_string(dir.path().join("sportshop_user.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json["name"], "Jordan");
    assert_eq!(json["dob"], "2001-04-15");
    assert_eq!(json["email"], "jordan@example.com");
    assert_eq!(json["sports"], serde_json::json!(["Running"]));
    assert_eq!(json["brands"], serde_json::json!(["Nike"]));
}

#[test]
fn test_reset_forgets_shopper() {
    let dir = tempfile::tempdir().unwrap();
    let mut shop = open(dir.path());
    shop.register(&valid_form(), today()).unwrap();
    shop.reset_profile().unwrap();

    let reopened = open(dir.path());
    assert!(reopened.profile().is_none());
    assert_eq!(reopened.speaker().last(), REGISTRATION_PROMPT);
}

#[test]
fn test_corrupt_profile_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    FileStore::new(dir.path())
        .set(PROFILE_KEY, "{\"name\": 42}")
        .unwrap();

    let result = Storefront::open(
        Catalog::builtin(),
        FileStore::new(dir.path()),
        RecordingSpeaker::default(),
    );
    assert!(matches!(result, Err(StorageError::Corrupt { .. })));
}

// =============================================================================
// Validation
// =============================================================================

#[test]
fn test_thirteenth_birthday_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let mut shop = open(dir.path());

    let mut form = valid_form();
    form.dob = "2013-10-20".to_string();
    let err = shop.register(&form, today()).unwrap_err();
    assert!(matches!(
        err,
        RegisterError::Validation(ValidationError::Underage { age: 12, .. })
    ));
    assert_eq!(err.user_message(), "You must be 13+ to register.");

    form.dob = "2013-10-19".to_string();
    shop.register(&form, today()).unwrap();
    assert!(shop.profile().is_some());
}

#[test]
fn test_rejected_form_keeps_previous_profile() {
    let dir = tempfile::tempdir().unwrap();
    let mut shop = open(dir.path());
    shop.register(&valid_form(), today()).unwrap();

    let mut form = valid_form();
    form.name = "Someone Else".to_string();
    form.email = "not-an-email".to_string();
    let err = shop.register(&form, today()).unwrap_err();
    assert_eq!(err.user_message(), "Please enter a valid email address.");

    assert_eq!(shop.profile().map(|p| p.name.as_str()), Some("Jordan"));
    let reopened = open(dir.path());
    assert_eq!(reopened.profile().map(|p| p.name.as_str()), Some("Jordan"));
}

#[test]
fn test_missing_fields_come_first() {
    let dir = tempfile::tempdir().unwrap();
    let mut shop = open(dir.path());

    let mut form = valid_form();
    form.phone = "   ".to_string();
    form.dob = "2020-01-01".to_string();
    let err = shop.register(&form, today()).unwrap_err();
    assert_eq!(err.user_message(), "Please complete all required fields.");
    assert_eq!(
        shop.speaker().last(),
        "Please complete all required fields."
    );
    assert!(!dir.path().join("sportshop_user.json").exists());
}

#[test]
fn test_unknown_preference_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut shop = open(dir.path());

    let mut form = valid_form();
    form.brands = vec!["Reebok".to_string()];
    let err = shop.register(&form, today()).unwrap_err();
    assert!(matches!(
        err,
        RegisterError::Validation(ValidationError::UnknownPreference(_))
    ));
}
