//! The static product catalog.
//!
//! A [`Catalog`] is built once at startup and never mutated. Construction
//! checks the invariants the engine and the cart ledger rely on: unique ids,
//! non-negative prices and a single currency.

use std::collections::HashSet;

use thiserror::Error;

use crate::types::{Brand, CurrencyCode, Price, Product, ProductId, Sport};

/// Reasons a product list cannot form a catalog.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate product id: {0}")]
    DuplicateId(ProductId),
    #[error("product {0} has a negative price")]
    NegativePrice(ProductId),
    #[error("product {id} is priced in {found:?}, catalog uses {expected:?}")]
    MixedCurrency {
        id: ProductId,
        expected: CurrencyCode,
        found: CurrencyCode,
    },
}

/// Fixed, ordered sequence of products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, preserving the given order.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found while scanning in order.
    pub fn new(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        let currency = products.first().map(|p| p.price.currency_code);

        for product in &products {
            if !seen.insert(&product.id) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
            if product.price.is_negative() {
                return Err(CatalogError::NegativePrice(product.id.clone()));
            }
            if let Some(expected) = currency
                && product.price.currency_code != expected
            {
                return Err(CatalogError::MixedCurrency {
                    id: product.id.clone(),
                    expected,
                    found: product.price.currency_code,
                });
            }
        }

        Ok(Self { products })
    }

    /// The storefront's built-in sports catalog.
    #[must_use]
    pub fn builtin() -> Self {
        let products = BUILTIN
            .iter()
            .map(|&(id, name, brand, sport, cents, image)| Product {
                id: ProductId::new(id),
                name: name.to_string(),
                brand,
                sport,
                price: Price::from_cents(cents, CurrencyCode::USD),
                image: image.to_string(),
            })
            .collect();
        Self { products }
    }

    /// Products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Currency every product is priced in. Defaults to USD when empty.
    #[must_use]
    pub fn currency(&self) -> CurrencyCode {
        self.products
            .first()
            .map_or_else(CurrencyCode::default, |p| p.price.currency_code)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

type BuiltinRow = (&'static str, &'static str, Brand, Sport, i64, &'static str);

const BUILTIN: [BuiltinRow; 10] = [
    (
        "p1",
        "Adidas Ultraboost 22",
        Brand::Adidas,
        Sport::Running,
        14999,
        "https://images.unsplash.com/photo-1519741497674-611481863552?q=80&w=800&auto=format&fit=crop",
    ),
    (
        "p2",
        "Nike Air Zoom Pegasus",
        Brand::Nike,
        Sport::Running,
        12999,
        "https://images.unsplash.com/photo-1525966222134-fcfa99b8ae77?q=80&w=800&auto=format&fit=crop",
    ),
    (
        "p3",
        "Nike Elite Basketball",
        Brand::Nike,
        Sport::Basketball,
        2999,
        "https://images.unsplash.com/photo-1599050751795-5f5f25a3f0c2?q=80&w=800&auto=format&fit=crop",
    ),
    (
        "p4",
        "Adidas Harden Vol. 7",
        Brand::Adidas,
        Sport::Basketball,
        15999,
        "https://images.unsplash.com/photo-1542291026-7eec264c27ff?q=80&w=800&auto=format&fit=crop",
    ),
    (
        "p5",
        "Puma Future Z Football",
        Brand::Puma,
        Sport::Football,
        2499,
        "https://images.unsplash.com/photo-1517927033932-b3d18e61fb3a?q=80&w=800&auto=format&fit=crop",
    ),
    (
        "p6",
        "Under Armour Tee",
        Brand::UnderArmour,
        Sport::Training,
        1999,
        "https://images.unsplash.com/photo-1542291026-94f52b4f4fa5?q=80&w=800&auto=format&fit=crop",
    ),
    (
        "p7",
        "Asics Gel-Kayano",
        Brand::Asics,
        Sport::Running,
        13999,
        "https://images.unsplash.com/photo-1520974735194-5f1cdb71ea2c?q=80&w=800&auto=format&fit=crop",
    ),
    (
        "p8",
        "New Balance 550",
        Brand::NewBalance,
        Sport::Training,
        10999,
        "https://images.unsplash.com/photo-1543508282-6319a3e2621f?q=80&w=800&auto=format&fit=crop",
    ),
    (
        "p9",
        "Wilson Tennis Racket",
        Brand::Nike,
        Sport::Tennis,
        8999,
        "https://images.unsplash.com/photo-1505664194779-8beaceb93744?q=80&w=800&auto=format&fit=crop",
    ),
    (
        "p10",
        "Adidas Yoga Mat",
        Brand::Adidas,
        Sport::Yoga,
        3999,
        "https://images.unsplash.com/photo-1603791452906-be44829c1562?q=80&w=800&auto=format&fit=crop",
    ),
];

#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn product(id: &str, name: &str, brand: Brand, sport: Sport, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            brand,
            sport,
            price: Price::from_cents(cents, CurrencyCode::USD),
            image: format!("https://example.com/{id}.jpg"),
        }
    }

    #[test]
    fn test_builtin_is_valid() {
        let builtin = Catalog::builtin();
        assert_eq!(builtin.len(), 10);
        assert_eq!(Catalog::new(builtin.products().to_vec()).unwrap(), builtin);
    }

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::builtin();
        let product = catalog.get(&ProductId::new("p9")).unwrap();
        assert_eq!(product.name, "Wilson Tennis Racket");
        assert!(catalog.get(&ProductId::new("p11")).is_none());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let result = Catalog::new(vec![
            product("a", "One", Brand::Nike, Sport::Golf, 100),
            product("a", "Two", Brand::Puma, Sport::Golf, 200),
        ]);
        assert_eq!(result, Err(CatalogError::DuplicateId(ProductId::new("a"))));
    }

    #[test]
    fn test_rejects_negative_price() {
        let result = Catalog::new(vec![product("a", "One", Brand::Nike, Sport::Golf, -1)]);
        assert!(matches!(result, Err(CatalogError::NegativePrice(_))));
    }

    #[test]
    fn test_rejects_mixed_currency() {
        let mut euro = product("b", "Two", Brand::Puma, Sport::Golf, 200);
        euro.price.currency_code = CurrencyCode::EUR;
        let result = Catalog::new(vec![product("a", "One", Brand::Nike, Sport::Golf, 100), euro]);
        assert!(matches!(result, Err(CatalogError::MixedCurrency { .. })));
    }

    #[test]
    fn test_empty_catalog_defaults_to_usd() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert_eq!(catalog.currency(), CurrencyCode::USD);
    }
}
