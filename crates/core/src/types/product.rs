//! Catalog product record.

use serde::{Deserialize, Serialize};

use super::{Brand, Price, ProductId, Sport};

/// A purchasable product. Immutable once placed in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub brand: Brand,
    pub sport: Sport,
    pub price: Price,
    /// Image URI.
    pub image: String,
}

impl Product {
    /// Whether `needle` (already lower-cased) occurs in the name, brand or
    /// sport, ignoring case. An empty needle matches everything.
    #[must_use]
    pub fn matches_text(&self, needle: &str) -> bool {
        needle.is_empty()
            || [self.name.as_str(), self.brand.as_str(), self.sport.as_str()]
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}
