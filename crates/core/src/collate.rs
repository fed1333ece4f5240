//! Locale-style string ordering for product and country names.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Base letters only: decomposed, accents dropped, lowercased.
fn fold(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two display names the way a shopper expects to read them.
///
/// Base letters decide first, so accented names sit beside their plain
/// spellings. Ties fall back to accents (plain first), then case (lowercase
/// first). The result is a total order.
#[must_use]
pub fn compare_names(a: &str, b: &str) -> Ordering {
    fold(a)
        .cmp(&fold(b))
        .then_with(|| {
            a.to_lowercase()
                .nfd()
                .cmp(b.to_lowercase().nfd())
        })
        .then_with(|| b.cmp(a))
}
