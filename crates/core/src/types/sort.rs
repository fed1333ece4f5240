//! Catalog sort modes.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// How visible products are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortMode {
    /// Preferred brand/sport first; catalog order when there is no profile.
    #[default]
    Personalized,
    PriceAsc,
    PriceDesc,
    NameAsc,
}

impl SortMode {
    /// Every mode, in the order a sort picker lists them.
    pub const ALL: [Self; 4] = [
        Self::Personalized,
        Self::PriceAsc,
        Self::PriceDesc,
        Self::NameAsc,
    ];

    /// Wire name (`price-asc` etc.).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Personalized => "personalized",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::NameAsc => "name-asc",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned for an unrecognized sort mode name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sort mode: {0} (expected personalized, price-asc, price-desc or name-asc)")]
pub struct UnknownSortModeError(pub String);

impl FromStr for SortMode {
    type Err = UnknownSortModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownSortModeError(s.to_owned()))
    }
}
