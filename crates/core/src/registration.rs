//! Shopper registration: form validation and age checks.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;
use thiserror::Error;

use crate::types::{Brand, Email, EmailError, Sport, UnknownNameError, UserProfile};

/// Youngest age allowed to register.
pub const MINIMUM_AGE: i32 = 13;

/// Date format of the date-of-birth field.
pub const DATE_OF_BIRTH_FORMAT: &str = "%Y-%m-%d";

/// Registration failures. Each is shown to the shopper, never treated as a
/// crash.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),
    #[error("invalid date of birth: {0}")]
    InvalidDateOfBirth(String),
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] EmailError),
    #[error("must be at least {minimum} years old (got {age})")]
    Underage { age: i32, minimum: i32 },
    #[error(transparent)]
    UnknownPreference(#[from] UnknownNameError),
}

impl ValidationError {
    /// Message shown (and spoken) to the shopper.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "Please complete all required fields.",
            Self::InvalidDateOfBirth(_) => "Please enter a valid date of birth.",
            Self::InvalidEmail(_) => "Please enter a valid email address.",
            Self::Underage { .. } => "You must be 13+ to register.",
            Self::UnknownPreference(_) => "Please pick sports and brands from the list.",
        }
    }
}

/// Raw registration input, as typed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationForm {
    pub name: String,
    /// `YYYY-MM-DD`.
    pub dob: String,
    pub country: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub sports: Vec<String>,
    #[serde(default)]
    pub brands: Vec<String>,
}

/// Whole years between `dob` and `today`.
///
/// A year only counts once the birthday has been reached, so a shopper born
/// on Feb 29 turns a year older on Mar 1 in non-leap years.
#[must_use]
pub fn age_on(dob: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// Check a registration form and build the profile it describes.
///
/// # Errors
///
/// Returns the first [`ValidationError`] in this order: missing fields,
/// unparseable date of birth, malformed email, age below [`MINIMUM_AGE`],
/// unknown sport or brand names.
pub fn validate(form: &RegistrationForm, today: NaiveDate) -> Result<UserProfile, ValidationError> {
    let name = form.name.trim();
    let dob = form.dob.trim();
    let country = form.country.trim();
    let email = form.email.trim();
    let phone = form.phone.trim();

    for (field, value) in [
        ("name", name),
        ("date of birth", dob),
        ("country", country),
        ("email", email),
        ("phone", phone),
    ] {
        if value.is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }

    let date_of_birth = NaiveDate::parse_from_str(dob, DATE_OF_BIRTH_FORMAT)
        .map_err(|e| ValidationError::InvalidDateOfBirth(format!("{dob}: {e}")))?;
    let email = Email::parse(email)?;

    let age = age_on(date_of_birth, today);
    if age < MINIMUM_AGE {
        return Err(ValidationError::Underage {
            age,
            minimum: MINIMUM_AGE,
        });
    }

    let preferred_sports = form
        .sports
        .iter()
        .map(|s| s.parse::<Sport>())
        .collect::<Result<BTreeSet<_>, _>>()?;
    let preferred_brands = form
        .brands
        .iter()
        .map(|b| b.parse::<Brand>())
        .collect::<Result<BTreeSet<_>, _>>()?;

    Ok(UserProfile {
        name: name.to_owned(),
        date_of_birth,
        country: country.to_owned(),
        email,
        phone: phone.to_owned(),
        preferred_sports,
        preferred_brands,
    })
}
