//! Display data for product listings and the cart.
//!
//! Views carry pre-formatted strings so renderers never touch decimals.

use std::fmt::Write as _;

use serde::Serialize;
use sportshop_core::{CartLedger, CartLine, Product};

/// Shown in place of an empty product list.
pub const EMPTY_LIST_MESSAGE: &str = "No products match your filters.";

/// Shown in place of an empty cart.
pub const EMPTY_CART_MESSAGE: &str = "Your cart is empty.";

/// Product card display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductCardView {
    pub id: String,
    pub name: String,
    /// `Brand • Sport`
    pub meta: String,
    pub price: String,
    pub image: String,
}

impl From<&Product> for ProductCardView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            meta: format!("{} • {}", product.brand, product.sport),
            price: product.price.display(),
            image: product.image.clone(),
        }
    }
}

/// Cart item display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: String,
    pub line_price: String,
}

impl From<&CartLine> for CartItemView {
    fn from(line: &CartLine) -> Self {
        Self {
            id: line.product.id.to_string(),
            name: line.product.name.clone(),
            quantity: line.quantity.get(),
            price: line.product.price.display(),
            line_price: line.line_total().display(),
        }
    }
}

/// Cart display data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub subtotal: String,
    pub item_count: u64,
}

impl From<&CartLedger> for CartView {
    fn from(cart: &CartLedger) -> Self {
        Self {
            items: cart.entries().map(CartItemView::from).collect(),
            subtotal: cart.subtotal().display(),
            item_count: cart.total_item_count(),
        }
    }
}

/// One line per product, or the empty-state message.
#[must_use]
pub fn render_product_list(products: &[&Product]) -> String {
    if products.is_empty() {
        return format!("{EMPTY_LIST_MESSAGE}\n");
    }

    let cards: Vec<ProductCardView> = products.iter().map(|p| ProductCardView::from(*p)).collect();
    let name_width = cards.iter().map(|c| c.name.chars().count()).max().unwrap_or(0);
    let meta_width = cards.iter().map(|c| c.meta.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for card in &cards {
        let _ = writeln!(
            out,
            "{:<4} {:<name_width$}  {:<meta_width$}  {:>9}",
            card.id, card.name, card.meta, card.price
        );
    }
    out
}

/// Cart lines followed by the item count and subtotal.
#[must_use]
pub fn render_cart(cart: &CartView) -> String {
    let mut out = String::new();
    if cart.items.is_empty() {
        let _ = writeln!(out, "{EMPTY_CART_MESSAGE}");
    }
    for item in &cart.items {
        let _ = writeln!(
            out,
            "{:<4} {} x{} @ {} = {}",
            item.id, item.name, item.quantity, item.price, item.line_price
        );
    }
    let noun = if cart.item_count == 1 { "item" } else { "items" };
    let _ = writeln!(out, "{} {noun}, subtotal {}", cart.item_count, cart.subtotal);
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use sportshop_core::{Catalog, ProductId};

    use super::*;

    #[test]
    fn test_product_card_view() {
        let catalog = Catalog::builtin();
        let card = ProductCardView::from(catalog.get(&ProductId::new("p1")).unwrap());
        assert_eq!(card.id, "p1");
        assert_eq!(card.name, "Adidas Ultraboost 22");
        assert_eq!(card.meta, "Adidas • Running");
        assert_eq!(card.price, "$149.99");
    }

    #[test]
    fn test_empty_product_list() {
        assert_eq!(render_product_list(&[]), "No products match your filters.\n");
    }

    #[test]
    fn test_product_list_has_one_line_per_product() {
        let catalog = Catalog::builtin();
        let products: Vec<&Product> = catalog.iter().take(3).collect();
        let rendered = render_product_list(&products);
        assert_eq!(rendered.lines().count(), 3);
        assert!(rendered.lines().next().unwrap().starts_with("p1"));
    }

    #[test]
    fn test_cart_view_from_ledger() {
        let catalog = Catalog::builtin();
        let mut cart = CartLedger::for_catalog(&catalog);
        let id = ProductId::new("p1");
        cart.add_one(&catalog, &id).unwrap();
        cart.add_one(&catalog, &id).unwrap();

        let view = CartView::from(&cart);
        assert_eq!(view.item_count, 2);
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 2);
        assert_eq!(view.subtotal, cart.subtotal().display());
        assert_eq!(view.items[0].line_price, view.subtotal);
    }

    #[test]
    fn test_empty_cart() {
        let view = CartView::from(&CartLedger::default());
        assert!(view.items.is_empty());
        assert_eq!(view.subtotal, "$0.00");
        assert_eq!(view.item_count, 0);
        let rendered = render_cart(&view);
        assert!(rendered.contains("Your cart is empty."));
        assert!(rendered.contains("0 items, subtotal $0.00"));
    }
}
