//! The shopper's current filter and sort selections.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::types::{Brand, SortMode, Sport, UserProfile};

/// Query, brand/sport selections and sort mode driving the visible list.
///
/// All mutation goes through the named operations below; the engine only
/// ever reads it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    selected_brands: BTreeSet<Brand>,
    selected_sports: BTreeSet<Sport>,
    query: String,
    sort_mode: SortMode,
}

impl FilterState {
    /// Default state, seeded with the profile's preferences when there is one.
    #[must_use]
    pub fn from_profile(profile: Option<&UserProfile>) -> Self {
        let mut state = Self::default();
        if let Some(profile) = profile {
            state.seed_from(profile);
        }
        state
    }

    /// Replace the brand/sport selections with the profile's preferences.
    /// Query and sort mode are left alone.
    pub fn seed_from(&mut self, profile: &UserProfile) {
        self.selected_brands.clone_from(&profile.preferred_brands);
        self.selected_sports.clone_from(&profile.preferred_sports);
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
    }

    pub const fn set_sort_mode(&mut self, mode: SortMode) {
        self.sort_mode = mode;
    }

    /// Select (`on = true`) or deselect a brand.
    pub fn toggle_brand(&mut self, brand: Brand, on: bool) {
        if on {
            self.selected_brands.insert(brand);
        } else {
            self.selected_brands.remove(&brand);
        }
    }

    /// Select (`on = true`) or deselect a sport.
    pub fn toggle_sport(&mut self, sport: Sport, on: bool) {
        if on {
            self.selected_sports.insert(sport);
        } else {
            self.selected_sports.remove(&sport);
        }
    }

    /// Drop the brand and sport selections, keeping query and sort mode.
    pub fn clear_selections(&mut self) {
        self.selected_brands.clear();
        self.selected_sports.clear();
    }

    /// Drop the brand and sport selections and the query. Sort mode is kept.
    pub fn clear_all(&mut self) {
        self.clear_selections();
        self.query.clear();
    }

    #[must_use]
    pub const fn selected_brands(&self) -> &BTreeSet<Brand> {
        &self.selected_brands
    }

    #[must_use]
    pub const fn selected_sports(&self) -> &BTreeSet<Sport> {
        &self.selected_sports
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn sort_mode(&self) -> SortMode {
        self.sort_mode
    }
}
