//! Profile repository: the single persisted `UserProfile` record.

use sportshop_core::UserProfile;

use crate::storage::{KeyValueStore, StorageError};

/// Well-known storage key of the shopper profile.
pub const PROFILE_KEY: &str = "sportshop_user";

/// Repository for the persisted shopper profile.
pub struct ProfileRepository<'a, S: KeyValueStore> {
    store: &'a mut S,
}

impl<'a, S: KeyValueStore> ProfileRepository<'a, S> {
    /// Create a new profile repository.
    pub const fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Load the stored profile; `None` when nobody has registered yet.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Corrupt` if the stored record is not a valid
    /// profile, or any backend error.
    pub fn load(&self) -> Result<Option<UserProfile>, StorageError> {
        let Some(raw) = self.store.get(PROFILE_KEY)? else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Corrupt {
                key: PROFILE_KEY.to_string(),
                source,
            })
    }

    /// Persist a profile, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if serialization or the backend write fails.
    pub fn save(&mut self, profile: &UserProfile) -> Result<(), StorageError> {
        let json = serde_json::to_string(profile).map_err(|source| StorageError::Serialize {
            key: PROFILE_KEY.to_string(),
            source,
        })?;
        self.store.set(PROFILE_KEY, &json)
    }

    /// Forget the stored profile.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend write fails.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(PROFILE_KEY)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeSet;

    use chrono::NaiveDate;
    use sportshop_core::{Brand, Email, Sport};

    use super::*;
    use crate::storage::MemoryStore;

    fn profile() -> UserProfile {
        UserProfile {
            name: "Noor".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(),
            country: "United Kingdom".to_string(),
            email: Email::parse("noor@example.com").unwrap(),
            phone: "07700 900123".to_string(),
            preferred_sports: BTreeSet::from([Sport::Cricket]),
            preferred_brands: BTreeSet::from([Brand::Puma, Brand::NewBalance]),
        }
    }

    #[test]
    fn test_absent_profile() {
        let mut store = MemoryStore::new();
        assert_eq!(ProfileRepository::new(&mut store).load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let mut repo = ProfileRepository::new(&mut store);
        repo.save(&profile()).unwrap();
        assert_eq!(repo.load().unwrap(), Some(profile()));
    }

    #[test]
    fn test_stored_layout_uses_short_field_names() {
        let mut store = MemoryStore::new();
        ProfileRepository::new(&mut store).save(&profile()).unwrap();

        let raw = store.get(PROFILE_KEY).unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["dob"], "1999-12-31");
        assert_eq!(json["brands"], serde_json::json!(["Puma", "New Balance"]));
        assert_eq!(json["sports"], serde_json::json!(["Cricket"]));
    }

    #[test]
    fn test_corrupt_record() {
        let mut store = MemoryStore::new();
        store.set(PROFILE_KEY, "{not json").unwrap();
        let err = ProfileRepository::new(&mut store).load().unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { .. }));
    }

    #[test]
    fn test_clear() {
        let mut store = MemoryStore::new();
        let mut repo = ProfileRepository::new(&mut store);
        repo.save(&profile()).unwrap();
        repo.clear().unwrap();
        assert_eq!(repo.load().unwrap(), None);
    }
}
