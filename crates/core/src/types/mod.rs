//! Core types for SportShop.
//!
//! This module provides type-safe wrappers for the storefront's domain
//! concepts.

pub mod email;
pub mod id;
pub mod price;
pub mod product;
pub mod profile;
pub mod sort;
pub mod taxonomy;

pub use email::{Email, EmailError};
pub use id::ProductId;
pub use price::{CurrencyCode, Price};
pub use product::Product;
pub use profile::UserProfile;
pub use sort::{SortMode, UnknownSortModeError};
pub use taxonomy::{Brand, Sport, UnknownNameError};
