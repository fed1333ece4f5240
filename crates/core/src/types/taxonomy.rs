//! Fixed brand and sport enumerations.
//!
//! Both serialize as their display names ("Under Armour", "Running"), which is
//! also how they appear in stored profiles.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when a name matches no brand or sport.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {name}")]
pub struct UnknownNameError {
    /// Which enumeration was searched ("brand" or "sport").
    pub kind: &'static str,
    /// The rejected input.
    pub name: String,
}

/// Product brand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Brand {
    Adidas,
    Nike,
    Puma,
    #[serde(rename = "Under Armour")]
    UnderArmour,
    #[serde(rename = "New Balance")]
    NewBalance,
    Asics,
}

impl Brand {
    /// Every brand, in display order.
    pub const ALL: [Self; 6] = [
        Self::Adidas,
        Self::Nike,
        Self::Puma,
        Self::UnderArmour,
        Self::NewBalance,
        Self::Asics,
    ];

    /// Display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adidas => "Adidas",
            Self::Nike => "Nike",
            Self::Puma => "Puma",
            Self::UnderArmour => "Under Armour",
            Self::NewBalance => "New Balance",
            Self::Asics => "Asics",
        }
    }

    /// Case-insensitive lookup by display name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|brand| brand.as_str().eq_ignore_ascii_case(name))
    }
}

/// Sport a product is made for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sport {
    Running,
    Basketball,
    Football,
    Tennis,
    Cricket,
    Training,
    Yoga,
    Cycling,
    Golf,
    Skateboarding,
}

impl Sport {
    /// Every sport, in display order.
    pub const ALL: [Self; 10] = [
        Self::Running,
        Self::Basketball,
        Self::Football,
        Self::Tennis,
        Self::Cricket,
        Self::Training,
        Self::Yoga,
        Self::Cycling,
        Self::Golf,
        Self::Skateboarding,
    ];

    /// Display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Basketball => "Basketball",
            Self::Football => "Football",
            Self::Tennis => "Tennis",
            Self::Cricket => "Cricket",
            Self::Training => "Training",
            Self::Yoga => "Yoga",
            Self::Cycling => "Cycling",
            Self::Golf => "Golf",
            Self::Skateboarding => "Skateboarding",
        }
    }

    /// Case-insensitive lookup by display name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|sport| sport.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Brand {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownNameError {
            kind: "brand",
            name: s.to_owned(),
        })
    }
}

impl FromStr for Sport {
    type Err = UnknownNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownNameError {
            kind: "sport",
            name: s.to_owned(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_case_and_padding() {
        assert_eq!(Brand::parse(" under armour "), Some(Brand::UnderArmour));
        assert_eq!(Sport::parse("YOGA"), Some(Sport::Yoga));
        assert_eq!(Brand::parse("Reebok"), None);
    }

    #[test]
    fn test_from_str_reports_kind() {
        let err = "Curling".parse::<Sport>().unwrap_err();
        assert_eq!(err.to_string(), "unknown sport: Curling");
    }

    #[test]
    fn test_serde_uses_display_names() {
        assert_eq!(
            serde_json::to_string(&Brand::NewBalance).unwrap(),
            "\"New Balance\""
        );
        let sport: Sport = serde_json::from_str("\"Skateboarding\"").unwrap();
        assert_eq!(sport, Sport::Skateboarding);
    }

    #[test]
    fn test_all_round_trips_through_as_str() {
        for brand in Brand::ALL {
            assert_eq!(Brand::parse(brand.as_str()), Some(brand));
        }
        for sport in Sport::ALL {
            assert_eq!(Sport::parse(sport.as_str()), Some(sport));
        }
    }
}
