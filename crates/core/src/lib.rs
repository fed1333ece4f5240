//! SportShop Core - catalog filtering, ranking and cart state.
//!
//! This crate holds the storefront's pure logic. It is used by:
//! - `storefront` - the session layer that wires shopper events to the core
//! - `cli` - the interactive shop and one-shot commands
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no
//! storage, no network, no speech. State is owned by the caller and passed by
//! reference; every mutation goes through a named operation.
//!
//! # Modules
//!
//! - [`types`] - Products, prices, brands/sports, sort modes, profiles
//! - [`catalog`] - The fixed product catalog
//! - [`filters`] - Query, brand/sport selections and sort mode
//! - [`engine`] - Filtering and (personalized) ordering
//! - [`cart`] - Cart ledger with derived totals
//! - [`registration`] - Registration form validation
//! - [`assistant`] - Help assistant request handling

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod assistant;
pub mod cart;
pub mod catalog;
pub mod collate;
pub mod engine;
pub mod filters;
pub mod registration;
pub mod types;

pub use cart::{CartError, CartLedger, CartLine, CartTotals};
pub use catalog::{Catalog, CatalogError};
pub use engine::compute_visible_products;
pub use filters::FilterState;
pub use registration::{RegistrationForm, ValidationError};
pub use types::*;
