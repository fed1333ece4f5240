//! Subcommand implementations and the wiring they share.

pub mod countries;
pub mod products;
pub mod profile;
pub mod register;
pub mod shop;

use chrono::NaiveDate;
use sportshop_core::Catalog;
use sportshop_storefront::error::Result;
use sportshop_storefront::{
    FileStore, HttpCountrySource, OfflineCountrySource, SilentSpeaker, Speaker, Storefront,
    StorefrontConfig, TracingSpeaker, load_countries,
};

/// Session type used by every command.
pub type Shop = Storefront<FileStore, Box<dyn Speaker>>;

/// Open a session on the configured data directory.
///
/// # Errors
///
/// Returns `StorefrontError::Storage` if a stored profile exists but cannot
/// be read.
pub fn open_storefront(config: &StorefrontConfig) -> Result<Shop> {
    let speaker: Box<dyn Speaker> = if config.speech_enabled {
        Box::new(TracingSpeaker::new())
    } else {
        Box::new(SilentSpeaker)
    };
    tracing::debug!(data_dir = %config.data_dir.display(), "opening storefront");
    let shop = Storefront::open(
        Catalog::builtin(),
        FileStore::new(&config.data_dir),
        speaker,
    )?;
    Ok(shop)
}

/// Country names for the registration form, never empty.
pub async fn country_list(config: &StorefrontConfig) -> Vec<String> {
    if config.countries.offline {
        return load_countries(&OfflineCountrySource).await;
    }
    match HttpCountrySource::new(&config.countries) {
        Ok(source) => load_countries(&source).await,
        Err(e) => {
            tracing::warn!(error = %e, "could not build country client");
            load_countries(&OfflineCountrySource).await
        }
    }
}

/// Today's date in local time, for age checks.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}
