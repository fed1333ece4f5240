//! The storefront session: one shopper, one cart, one set of filters.
//!
//! `Storefront` owns all mutable state and forwards every shopper event to
//! the core, persisting the profile and speaking feedback along the way.

use chrono::NaiveDate;
use sportshop_core::assistant::{self, HelpReply};
use sportshop_core::registration::{self, ValidationError};
use sportshop_core::{
    Brand, CartError, CartLedger, CartTotals, Catalog, FilterState, Product, ProductId,
    RegistrationForm, SortMode, Sport, UserProfile, compute_visible_products,
};
use tracing::instrument;

use crate::error::RegisterError;
use crate::profile::ProfileRepository;
use crate::speech::Speaker;
use crate::storage::{KeyValueStore, StorageError};

/// Spoken when nobody has registered yet.
pub const REGISTRATION_PROMPT: &str =
    "Welcome to SportShop. Please complete your quick registration to personalize your experience.";

/// Spoken when checkout is requested.
pub const CHECKOUT_UTTERANCE: &str = "Proceeding to checkout. This is a demo.";

/// Shown when checkout is requested.
pub const CHECKOUT_NOTICE: &str = "Checkout is a demo in this build.";

/// A shopper session over a catalog, a key-value store and a speaker.
pub struct Storefront<S: KeyValueStore, V: Speaker> {
    catalog: Catalog,
    profile: Option<UserProfile>,
    filters: FilterState,
    cart: CartLedger,
    store: S,
    speaker: V,
}

impl<S: KeyValueStore, V: Speaker> Storefront<S, V> {
    /// Start a session: load the stored profile, seed the filters from it and
    /// greet the shopper.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the stored profile cannot be read or parsed.
    #[instrument(skip_all)]
    pub fn open(catalog: Catalog, mut store: S, speaker: V) -> Result<Self, StorageError> {
        let profile = ProfileRepository::new(&mut store).load()?;
        let filters = FilterState::from_profile(profile.as_ref());
        let cart = CartLedger::for_catalog(&catalog);

        let mut storefront = Self {
            catalog,
            profile,
            filters,
            cart,
            store,
            speaker,
        };

        match &storefront.profile {
            Some(profile) => {
                tracing::info!(name = %profile.name, "returning shopper");
                let greeting = format!(
                    "Welcome back {}. Here are your recommendations.",
                    profile.name
                );
                storefront.speaker.speak(&greeting);
            }
            None => {
                tracing::info!("no stored profile, registration required");
                storefront.speaker.speak(REGISTRATION_PROMPT);
            }
        }

        Ok(storefront)
    }

    /// Validate and persist a registration, then personalize the session.
    ///
    /// On failure nothing is stored and the previous profile stays active.
    ///
    /// # Errors
    ///
    /// Returns `RegisterError::Validation` for a rejected form, or
    /// `RegisterError::Storage` if the profile cannot be saved.
    #[instrument(skip_all)]
    pub fn register(
        &mut self,
        form: &RegistrationForm,
        today: NaiveDate,
    ) -> Result<&UserProfile, RegisterError> {
        let profile = match registration::validate(form, today) {
            Ok(profile) => profile,
            Err(e) => {
                tracing::info!(error = %e, "registration rejected");
                self.speaker.speak(spoken_rejection(&e));
                return Err(e.into());
            }
        };

        ProfileRepository::new(&mut self.store).save(&profile)?;
        self.filters.seed_from(&profile);
        self.speaker.speak(&format!(
            "Thanks {}. Personalizing your store now.",
            profile.name
        ));
        tracing::info!(
            name = %profile.name,
            brands = profile.preferred_brands.len(),
            sports = profile.preferred_sports.len(),
            "registered shopper"
        );

        Ok(self.profile.insert(profile))
    }

    /// Forget the stored profile. Filters and cart are left alone.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    #[instrument(skip_all)]
    pub fn reset_profile(&mut self) -> Result<(), StorageError> {
        ProfileRepository::new(&mut self.store).clear()?;
        self.profile = None;
        tracing::info!("profile cleared");
        Ok(())
    }

    /// Products matching the current filters, in display order.
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        compute_visible_products(&self.catalog, &self.filters, self.profile.as_ref())
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.filters.set_query(text);
    }

    pub const fn set_sort_mode(&mut self, mode: SortMode) {
        self.filters.set_sort_mode(mode);
    }

    pub fn toggle_brand(&mut self, brand: Brand, on: bool) {
        self.filters.toggle_brand(brand, on);
    }

    pub fn toggle_sport(&mut self, sport: Sport, on: bool) {
        self.filters.toggle_sport(sport, on);
    }

    /// Clear brand/sport selections and the query.
    pub fn clear_filters(&mut self) {
        self.filters.clear_all();
    }

    /// Add one unit of a product and announce it.
    ///
    /// # Errors
    ///
    /// Returns `CartError::ProductNotFound` for an id outside the catalog.
    #[instrument(skip(self, id), fields(product_id = %id))]
    pub fn add_to_cart(&mut self, id: &ProductId) -> Result<CartTotals, CartError> {
        let totals = self.cart.add_one(&self.catalog, id).inspect_err(|e| {
            tracing::error!(error = %e, "add to cart failed");
        })?;

        if let Some(product) = self.catalog.get(id) {
            self.speaker
                .speak(&format!("{} added to your cart.", product.name));
        }
        Ok(totals)
    }

    /// Shift a cart line's quantity; zero or below removes the line.
    pub fn change_quantity(&mut self, id: &ProductId, delta: i64) -> CartTotals {
        self.cart.change_quantity(id, delta)
    }

    /// Ask the help assistant. The reply is spoken and returned.
    #[instrument(skip(self))]
    pub fn help(&mut self, request: &str) -> HelpReply {
        let intent = assistant::interpret(request);
        tracing::debug!(?intent, "help request");
        let reply = assistant::respond(intent, &mut self.filters);
        self.speaker.speak(&reply.text);
        reply
    }

    /// Demo checkout: nothing is charged and the cart is kept.
    pub fn checkout(&mut self) -> &'static str {
        tracing::info!(
            items = self.cart.total_item_count(),
            subtotal = %self.cart.subtotal(),
            "checkout requested"
        );
        self.speaker.speak(CHECKOUT_UTTERANCE);
        CHECKOUT_NOTICE
    }

    pub fn stop_speaking(&mut self) {
        self.speaker.cancel();
    }

    #[must_use]
    pub const fn cart(&self) -> &CartLedger {
        &self.cart
    }

    #[must_use]
    pub const fn profile(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn speaker(&self) -> &V {
        &self.speaker
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Give back the capabilities, e.g. to reopen a session on the same store.
    pub fn into_parts(self) -> (S, V) {
        (self.store, self.speaker)
    }
}

/// What to say when a registration is rejected.
const fn spoken_rejection(error: &ValidationError) -> &'static str {
    match error {
        ValidationError::Underage { .. } => "Sorry, you must be thirteen or older to register.",
        other => other.user_message(),
    }
}
