//! `sportshop products`

use std::io::{self, Write};

use sportshop_core::{Brand, SortMode, Sport, UnknownNameError};
use sportshop_storefront::views::render_product_list;
use sportshop_storefront::{KeyValueStore, Speaker, Storefront, StorefrontConfig};

/// Filters given on the command line.
#[derive(Debug, Default)]
pub struct ProductsRequest {
    pub query: Option<String>,
    pub brands: Vec<String>,
    pub sports: Vec<String>,
    pub sort: Option<SortMode>,
}

/// Print the visible products.
///
/// # Errors
///
/// Returns an error for an unknown brand or sport, an unreadable profile, or
/// a failed stdout write.
pub fn run(
    config: &StorefrontConfig,
    request: &ProductsRequest,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut shop = super::open_storefront(config)?;
    apply(&mut shop, request)?;

    let mut out = io::stdout().lock();
    out.write_all(render_product_list(&shop.visible_products()).as_bytes())?;
    Ok(())
}

/// Apply command-line filters on top of the profile-seeded ones. Brands or
/// sports given explicitly replace the profile's selections.
///
/// # Errors
///
/// Returns `UnknownNameError` for a brand or sport outside the catalog
/// vocabulary; nothing is changed in that case.
pub fn apply<S: KeyValueStore, V: Speaker>(
    shop: &mut Storefront<S, V>,
    request: &ProductsRequest,
) -> Result<(), UnknownNameError> {
    let brands = request
        .brands
        .iter()
        .map(|name| name.parse::<Brand>())
        .collect::<Result<Vec<_>, _>>()?;
    let sports = request
        .sports
        .iter()
        .map(|name| name.parse::<Sport>())
        .collect::<Result<Vec<_>, _>>()?;

    if !brands.is_empty() {
        let seeded: Vec<Brand> = shop.filters().selected_brands().iter().copied().collect();
        for brand in seeded {
            shop.toggle_brand(brand, false);
        }
        for brand in brands {
            shop.toggle_brand(brand, true);
        }
    }
    if !sports.is_empty() {
        let seeded: Vec<Sport> = shop.filters().selected_sports().iter().copied().collect();
        for sport in seeded {
            shop.toggle_sport(sport, false);
        }
        for sport in sports {
            shop.toggle_sport(sport, true);
        }
    }
    if let Some(query) = &request.query {
        shop.set_query(query.as_str());
    }
    if let Some(sort) = request.sort {
        shop.set_sort_mode(sort);
    }
    Ok(())
}
