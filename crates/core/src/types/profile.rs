//! Registered shopper profile.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Brand, Email, Sport};

/// The shopper's profile, created at registration.
///
/// Serialized field names (`dob`, `sports`, `brands`) are the storage layout
/// of the persisted profile record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    #[serde(rename = "dob")]
    pub date_of_birth: NaiveDate,
    pub country: String,
    pub email: Email,
    pub phone: String,
    #[serde(rename = "sports", default)]
    pub preferred_sports: BTreeSet<Sport>,
    #[serde(rename = "brands", default)]
    pub preferred_brands: BTreeSet<Brand>,
}

impl UserProfile {
    /// Whether the shopper picked this brand at registration.
    #[must_use]
    pub fn prefers_brand(&self, brand: Brand) -> bool {
        self.preferred_brands.contains(&brand)
    }

    /// Whether the shopper picked this sport at registration.
    #[must_use]
    pub fn prefers_sport(&self, sport: Sport) -> bool {
        self.preferred_sports.contains(&sport)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_stored_layout() {
        let json = r#"{
            "name": "Ana",
            "dob": "1990-04-02",
            "country": "India",
            "email": "ana@example.com",
            "phone": "555-0100",
            "sports": ["Running", "Yoga"],
            "brands": ["Under Armour"]
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.date_of_birth, NaiveDate::from_ymd_opt(1990, 4, 2).unwrap());
        assert!(profile.prefers_sport(Sport::Yoga));
        assert!(profile.prefers_brand(Brand::UnderArmour));
        assert!(!profile.prefers_brand(Brand::Nike));
    }

    #[test]
    fn test_missing_preferences_default_to_empty() {
        let json = r#"{"name":"Bo","dob":"2000-01-01","country":"France",
            "email":"bo@example.com","phone":"1"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert!(profile.preferred_sports.is_empty());
        assert!(profile.preferred_brands.is_empty());
    }
}
