//! `sportshop register`

use std::io::{self, Write};

use sportshop_core::{RegistrationForm, UserProfile};
use sportshop_storefront::error::Result;
use sportshop_storefront::{RegisterError, StorefrontConfig, StorefrontError};

/// Register a shopper from command-line fields.
///
/// # Errors
///
/// Returns an error if the form is rejected or the profile cannot be stored.
pub fn run(
    config: &StorefrontConfig,
    form: &RegistrationForm,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let mut out = io::stdout().lock();
    match register(config, form) {
        Ok(profile) => {
            writeln!(out, "Registered {}.", profile.name)?;
            Ok(())
        }
        Err(StorefrontError::Register(e @ RegisterError::Validation(_))) => {
            writeln!(out, "{}", e.user_message())?;
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Open the configured session and register `form` on it.
fn register(config: &StorefrontConfig, form: &RegistrationForm) -> Result<UserProfile> {
    let mut shop = super::open_storefront(config)?;
    let profile = shop.register(form, super::today())?.clone();
    Ok(profile)
}
