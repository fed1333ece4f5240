//! Help assistant: maps a typed or transcribed request to a filter change.
//!
//! Matching is by keyword on the lower-cased text; the first rule that
//! matches wins:
//!
//! 1. `find` / `show` adds every brand and sport named in the text
//! 2. `cart` opens the cart
//! 3. `reset` / `clear` drops the brand and sport selections
//!
//! Anything else gets a usage hint.

use std::collections::BTreeSet;

use crate::filters::FilterState;
use crate::types::{Brand, Sport};

/// Reply when the request is not understood.
pub const USAGE_HINT: &str = "I can help you find items. Try: find nike running shoes.";

/// What the shopper asked for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpIntent {
    Find {
        brands: BTreeSet<Brand>,
        sports: BTreeSet<Sport>,
    },
    OpenCart,
    ClearFilters,
    Unrecognized,
}

/// The assistant's answer, plus whether the caller should show the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpReply {
    pub text: String,
    pub open_cart: bool,
}

impl HelpReply {
    fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            open_cart: false,
        }
    }
}

/// Classify a request.
#[must_use]
pub fn interpret(request: &str) -> HelpIntent {
    let lower = request.to_lowercase();
    let mentions = |word: &str| lower.contains(word);

    if mentions("find") || mentions("show") {
        HelpIntent::Find {
            brands: Brand::ALL
                .into_iter()
                .filter(|b| mentions(b.as_str().to_lowercase().as_str()))
                .collect(),
            sports: Sport::ALL
                .into_iter()
                .filter(|s| mentions(s.as_str().to_lowercase().as_str()))
                .collect(),
        }
    } else if mentions("cart") {
        HelpIntent::OpenCart
    } else if mentions("reset") || mentions("clear") {
        HelpIntent::ClearFilters
    } else {
        HelpIntent::Unrecognized
    }
}

/// Apply an intent to the filters and phrase the reply.
///
/// A find reply lists every selected brand, then every selected sport, each
/// in catalog vocabulary order regardless of when it was selected.
pub fn respond(intent: HelpIntent, filters: &mut FilterState) -> HelpReply {
    match intent {
        HelpIntent::Find { brands, sports } => {
            for brand in brands {
                filters.toggle_brand(brand, true);
            }
            for sport in sports {
                filters.toggle_sport(sport, true);
            }

            let selected: Vec<&str> = filters
                .selected_brands()
                .iter()
                .map(|b| b.as_str())
                .chain(filters.selected_sports().iter().map(|s| s.as_str()))
                .collect();
            let summary = if selected.is_empty() {
                "your preferences".to_string()
            } else {
                selected.join(", ")
            };
            HelpReply::say(format!("Updated filters for: {summary}."))
        }
        HelpIntent::OpenCart => HelpReply {
            text: "Opening your cart.".to_string(),
            open_cart: true,
        },
        HelpIntent::ClearFilters => {
            filters.clear_selections();
            HelpReply::say("Cleared filters.")
        }
        HelpIntent::Unrecognized => HelpReply::say(USAGE_HINT),
    }
}
