//! Integration tests for SportShop.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sportshop-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `shopping_session` - Storefront sessions end to end (browse, cart, help)
//! - `registration` - Registration, persistence and returning shoppers
//! - `countries` - Country list loading and fallback
//!
//! This library holds the shared fixtures: a speaker that records what it
//! says, a fixed "today" and a valid registration form.

#![cfg_attr(not(test), forbid(unsafe_code))]

use chrono::NaiveDate;
use sportshop_core::RegistrationForm;
use sportshop_storefront::Speaker;

/// Speaker that keeps every utterance and counts cancellations.
#[derive(Debug, Default)]
pub struct RecordingSpeaker {
    pub spoken: Vec<String>,
    pub cancelled: usize,
}

impl RecordingSpeaker {
    /// The most recent utterance, or `""`.
    #[must_use]
    pub fn last(&self) -> &str {
        self.spoken.last().map_or("", String::as_str)
    }
}

impl Speaker for RecordingSpeaker {
    fn speak(&mut self, text: &str) {
        self.spoken.push(text.to_string());
    }

    fn cancel(&mut self) {
        self.cancelled += 1;
    }
}

/// The date every age check in these tests is made on.
#[must_use]
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).unwrap_or_default()
}

/// A form that passes validation.
#[must_use]
pub fn valid_form() -> RegistrationForm {
    RegistrationForm {
        name: "Jordan".to_string(),
        dob: "2001-04-15".to_string(),
        country: "Canada".to_string(),
        email: "jordan@example.com".to_string(),
        phone: "+1 555 0100".to_string(),
        sports: vec!["Running".to_string()],
        brands: vec!["Nike".to_string()],
    }
}
