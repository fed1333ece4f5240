//! Storefront error types.
//!
//! Each concern keeps its own error enum (`StorageError`, `ConfigError`,
//! `CountryError`, core's `CartError` and `ValidationError`). The types here
//! combine them for operations that touch more than one.

use sportshop_core::ValidationError;
use thiserror::Error;

use crate::storage::StorageError;

/// Registration failed.
#[derive(Debug, Error)]
pub enum RegisterError {
    /// The form was rejected; nothing was stored.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The profile was valid but could not be persisted.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl RegisterError {
    /// Message to show and speak to the shopper.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Validation(e) => e.user_message(),
            Self::Storage(_) => "Could not save your profile. Please try again.",
        }
    }
}

/// Error for flows that open a session and then act on it.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Registration error: {0}")]
    Register(#[from] RegisterError),
}

/// Result type alias for storefront operations.
pub type Result<T> = std::result::Result<T, StorefrontError>;
