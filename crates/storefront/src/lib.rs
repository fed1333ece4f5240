//! SportShop Storefront library.
//!
//! The collaborator layer between a shopper and the core: it owns the
//! session state, persists the profile, speaks feedback and fetches the
//! country list. Everything effectful sits behind a capability trait so the
//! session can run against in-memory doubles.
//!
//! # Modules
//!
//! - [`config`] - Environment configuration
//! - [`storage`] - Key-value storage (file and in-memory)
//! - [`profile`] - Profile repository over a key-value store
//! - [`speech`] - Speech output
//! - [`countries`] - Country list with offline fallback
//! - [`session`] - The `Storefront` session
//! - [`views`] - Display data for products and the cart

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod countries;
pub mod error;
pub mod profile;
pub mod session;
pub mod speech;
pub mod storage;
pub mod views;

pub use config::{ConfigError, CountriesConfig, DEFAULT_LOG_FILTER, LogFormat, StorefrontConfig};
pub use countries::{
    CountryError, CountrySource, HttpCountrySource, OfflineCountrySource, load_countries,
};
pub use error::{RegisterError, StorefrontError};
pub use profile::{PROFILE_KEY, ProfileRepository};
pub use session::Storefront;
pub use speech::{SilentSpeaker, Speaker, TracingSpeaker};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
