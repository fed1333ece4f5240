//! Cart ledger: product id to (product, quantity), in insertion order.

use std::num::NonZeroU32;

use serde::Serialize;
use thiserror::Error;

use crate::catalog::Catalog;
use crate::types::{CurrencyCode, Price, Product, ProductId};

/// Cart operation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The id is not in the catalog. Ids come from rendered catalog entries,
    /// so this is a caller bug.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),
}

/// One line of the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: NonZeroU32,
}

impl CartLine {
    /// Unit price times quantity, at full precision.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.product.price.times(self.quantity.get())
    }
}

/// Totals after a ledger change, for re-rendering the cart badge and summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    pub item_count: u64,
    pub subtotal: Price,
}

/// The shopping cart.
///
/// Every line has a positive quantity; a change that would take a line to
/// zero or below removes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLedger {
    lines: Vec<CartLine>,
    currency: CurrencyCode,
}

impl Default for CartLedger {
    fn default() -> Self {
        Self::new(CurrencyCode::default())
    }
}

impl CartLedger {
    /// An empty cart whose subtotal is expressed in `currency`.
    #[must_use]
    pub const fn new(currency: CurrencyCode) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// An empty cart in the catalog's currency.
    #[must_use]
    pub fn for_catalog(catalog: &Catalog) -> Self {
        Self::new(catalog.currency())
    }

    /// Add one unit of a catalog product.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ProductNotFound`] if `id` is not in `catalog`.
    pub fn add_one(&mut self, catalog: &Catalog, id: &ProductId) -> Result<CartTotals, CartError> {
        let product = catalog
            .get(id)
            .ok_or_else(|| CartError::ProductNotFound(id.clone()))?;

        if let Some(line) = self.lines.iter_mut().find(|line| &line.product.id == id) {
            line.quantity = line.quantity.saturating_add(1);
            tracing::debug!(product_id = %id, quantity = line.quantity.get(), "incremented cart line");
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity: NonZeroU32::MIN,
            });
            tracing::debug!(product_id = %id, "added cart line");
        }

        Ok(self.totals())
    }

    /// Shift a line's quantity by `delta`. Unknown ids are ignored; a result
    /// of zero or less removes the line.
    pub fn change_quantity(&mut self, id: &ProductId, delta: i64) -> CartTotals {
        let Some(index) = self.lines.iter().position(|line| &line.product.id == id) else {
            return self.totals();
        };

        let next = self
            .lines
            .get(index)
            .map_or(0, |line| i64::from(line.quantity.get()).saturating_add(delta));

        if next <= 0 {
            self.lines.remove(index);
            tracing::debug!(product_id = %id, "removed cart line");
        } else if let Some(line) = self.lines.get_mut(index) {
            let clamped = u32::try_from(next).unwrap_or(u32::MAX);
            if let Some(quantity) = NonZeroU32::new(clamped) {
                line.quantity = quantity;
            }
            tracing::debug!(product_id = %id, quantity = clamped, "changed cart quantity");
        }

        self.totals()
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_item_count(&self) -> u64 {
        self.lines
            .iter()
            .map(|line| u64::from(line.quantity.get()))
            .sum()
    }

    /// Sum of price times quantity. Not rounded; use [`Price::display`].
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines
            .iter()
            .map(CartLine::line_total)
            .fold(Price::zero(self.currency), |acc, line| acc + line)
    }

    #[must_use]
    pub fn totals(&self) -> CartTotals {
        CartTotals {
            item_count: self.total_item_count(),
            subtotal: self.subtotal(),
        }
    }

    /// Lines in the order they were first added.
    pub fn entries(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.iter()
    }

    /// Quantity of a product, or 0 when it is not in the cart.
    #[must_use]
    pub fn quantity_of(&self, id: &ProductId) -> u32 {
        self.lines
            .iter()
            .find(|line| &line.product.id == id)
            .map_or(0, |line| line.quantity.get())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
