//! `sportshop profile show|reset`

use std::io::{self, Write};

use sportshop_storefront::error::Result;
use sportshop_storefront::{
    FileStore, ProfileRepository, StorageError, StorefrontConfig, StorefrontError,
};

/// Print the stored profile as pretty JSON.
///
/// # Errors
///
/// Returns an error if the profile cannot be read or stdout cannot be written.
pub fn show(config: &StorefrontConfig) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut store = FileStore::new(&config.data_dir);
    let profile = ProfileRepository::new(&mut store).load().inspect_err(|_| {
        tracing::warn!("Stored profile is unreadable; `sportshop profile reset` removes it");
    })?;

    let mut out = io::stdout().lock();
    match profile {
        Some(profile) => writeln!(out, "{}", serde_json::to_string_pretty(&profile)?)?,
        None => writeln!(out, "No profile stored.")?,
    }
    Ok(())
}

/// Delete the stored profile.
///
/// # Errors
///
/// Returns `StorefrontError::Storage` if the profile cannot be removed.
pub fn reset(config: &StorefrontConfig) -> Result<()> {
    match super::open_storefront(config) {
        Ok(mut shop) => shop.reset_profile()?,
        // An unreadable record cannot open a session, so remove it directly.
        Err(StorefrontError::Storage(StorageError::Corrupt { .. })) => {
            tracing::warn!("Removing unreadable stored profile");
            ProfileRepository::new(&mut FileStore::new(&config.data_dir)).clear()?;
        }
        Err(e) => return Err(e),
    }
    tracing::info!(data_dir = %config.data_dir.display(), "Profile reset");
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sportshop_core::RegistrationForm;
    use sportshop_storefront::{KeyValueStore, PROFILE_KEY};

    use super::*;

    fn config_for(dir: &std::path::Path) -> StorefrontConfig {
        let mut config = StorefrontConfig::from_lookup(|_| None).unwrap();
        config.data_dir = dir.to_path_buf();
        config.speech_enabled = false;
        config
    }

    #[test]
    fn test_reset_clears_registered_profile() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        let form = RegistrationForm {
            name: "Ari".to_string(),
            dob: "2000-01-01".to_string(),
            country: "India".to_string(),
            email: "ari@example.com".to_string(),
            phone: "98765 43210".to_string(),
            sports: vec!["Running".to_string()],
            brands: vec!["Nike".to_string()],
        };
        super::super::open_storefront(&config)
            .unwrap()
            .register(&form, super::super::today())
            .unwrap();

        reset(&config).unwrap();
        assert!(super::super::open_storefront(&config).unwrap().profile().is_none());
    }

    #[test]
    fn test_reset_removes_unreadable_profile() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(dir.path());
        FileStore::new(dir.path()).set(PROFILE_KEY, "not json").unwrap();
        assert!(super::super::open_storefront(&config).is_err());

        reset(&config).unwrap();
        assert!(super::super::open_storefront(&config).unwrap().profile().is_none());
    }

    #[test]
    fn test_reset_without_profile_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        reset(&config_for(dir.path())).unwrap();
    }
}
