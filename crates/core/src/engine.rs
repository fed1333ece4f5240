//! Catalog filter/rank engine.
//!
//! [`compute_visible_products`] is a pure function of the catalog, the filter
//! state and the (optional) shopper profile. It borrows products from the
//! catalog and never mutates its inputs.
//!
//! # Filtering
//!
//! A product is visible when all of these hold:
//! - the query is empty, or the name, brand or sport contains it (ignoring case)
//! - no brand is selected, or the product's brand is selected
//! - no sport is selected, or the product's sport is selected
//!
//! # Ordering
//!
//! | Mode | Order |
//! |------|-------|
//! | `price-asc` / `price-desc` | by price, ties in catalog order |
//! | `name-asc` | by [`compare_names`], ties in catalog order |
//! | `personalized` | [`personalization_score`] descending, then name, then id |
//!
//! Personalized ordering without a profile leaves the catalog order untouched.

use std::cmp::Ordering;

use crate::catalog::Catalog;
use crate::collate::compare_names;
use crate::filters::FilterState;
use crate::types::{Product, SortMode, UserProfile};

/// Score boost for a product whose brand the shopper prefers.
pub const BRAND_BOOST: u8 = 2;
/// Score boost for a product whose sport the shopper prefers.
pub const SPORT_BOOST: u8 = 1;

/// Products to display, filtered and ordered.
#[must_use]
pub fn compute_visible_products<'a>(
    catalog: &'a Catalog,
    filters: &FilterState,
    profile: Option<&UserProfile>,
) -> Vec<&'a Product> {
    let needle = filters.query().to_lowercase();
    let mut visible: Vec<&Product> = catalog
        .iter()
        .filter(|p| is_visible(p, filters, &needle))
        .collect();

    match (filters.sort_mode(), profile) {
        (SortMode::PriceAsc, _) => visible.sort_by(|a, b| a.price.amount.cmp(&b.price.amount)),
        (SortMode::PriceDesc, _) => visible.sort_by(|a, b| b.price.amount.cmp(&a.price.amount)),
        (SortMode::NameAsc, _) => visible.sort_by(|a, b| compare_names(&a.name, &b.name)),
        (SortMode::Personalized, Some(profile)) => {
            visible.sort_by(|a, b| compare_personalized(a, b, profile));
        }
        (SortMode::Personalized, None) => {}
    }

    visible
}

/// The filtering predicate. `needle` is the lower-cased query.
fn is_visible(product: &Product, filters: &FilterState, needle: &str) -> bool {
    let brands = filters.selected_brands();
    let sports = filters.selected_sports();

    product.matches_text(needle)
        && (brands.is_empty() || brands.contains(&product.brand))
        && (sports.is_empty() || sports.contains(&product.sport))
}

/// How strongly a product matches the shopper's preferences (0 to 3).
#[must_use]
pub fn personalization_score(product: &Product, profile: &UserProfile) -> u8 {
    let brand = if profile.prefers_brand(product.brand) {
        BRAND_BOOST
    } else {
        0
    };
    let sport = if profile.prefers_sport(product.sport) {
        SPORT_BOOST
    } else {
        0
    };
    brand + sport
}

/// Total order for personalized ranking: score descending, then name
/// ascending. Product ids break the remaining ties.
#[must_use]
pub fn compare_personalized(a: &Product, b: &Product, profile: &UserProfile) -> Ordering {
    personalization_score(b, profile)
        .cmp(&personalization_score(a, profile))
        .then_with(|| compare_names(&a.name, &b.name))
        .then_with(|| a.id.cmp(&b.id))
}
