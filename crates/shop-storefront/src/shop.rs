//! Shop page: the filterable product listing.

use crate::state::PageState;
use shop_commerce::prelude::*;
use shop_data::{CatalogClient, CatalogSnapshot, Transport};
use tracing::{info, warn};

/// Shown when the catalog could not be loaded.
pub const LOAD_FAILED: &str = "Failed to load products. Please try again later.";

/// Shown when the filters leave nothing visible.
pub const NO_MATCHES: &str = "No products found matching your criteria.";

/// The shop page: catalog snapshot plus the active listing criteria.
#[derive(Debug, Clone, Default)]
pub struct ShopPage {
    state: PageState<CatalogSnapshot>,
    criteria: ListingCriteria,
}

impl ShopPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with criteria already selected.
    pub fn with_criteria(criteria: ListingCriteria) -> Self {
        Self {
            state: PageState::Loading,
            criteria,
        }
    }

    /// Fetch products and categories together.
    ///
    /// Any failure leaves the page in `Failed` with the page message; no
    /// partial catalog is kept.
    pub async fn load<T: Transport>(&mut self, client: &CatalogClient<T>) {
        self.state = PageState::Loading;
        self.state = match client.load_catalog().await {
            Ok(snapshot) => {
                info!(products = snapshot.products.len(), "Shop page ready");
                PageState::Ready(snapshot)
            }
            Err(e) => {
                warn!(error = %e, "Shop page failed to load");
                PageState::Failed(LOAD_FAILED.to_string())
            }
        };
    }

    pub fn state(&self) -> &PageState<CatalogSnapshot> {
        &self.state
    }

    pub fn criteria(&self) -> &ListingCriteria {
        &self.criteria
    }

    /// Category labels for the filter control, as fetched.
    pub fn categories(&self) -> &[String] {
        self.state
            .ready()
            .map(|s| s.categories.as_slice())
            .unwrap_or_default()
    }

    pub fn set_category(&mut self, label: &str) {
        self.criteria.category = CategoryFilter::from_label(label);
    }

    pub fn set_price(&mut self, range: Option<PriceRange>) {
        self.criteria.price = range;
    }

    pub fn set_sort(&mut self, sort: SortOption) {
        self.criteria.sort = sort;
    }

    /// The "Clear all filters" action.
    pub fn clear_filters(&mut self) {
        self.criteria.clear();
    }

    /// Run the pipeline over the loaded catalog.
    pub fn listing(&self) -> Option<Listing> {
        self.state
            .ready()
            .map(|s| Listing::build(&s.products, &self.criteria))
    }

    /// Visible products in display order; empty until loaded.
    pub fn visible(&self) -> Vec<Product> {
        self.listing().map(|l| l.items).unwrap_or_default()
    }

    /// "Showing X of Y products", once loaded.
    pub fn result_label(&self) -> Option<String> {
        self.listing().map(|l| l.summary())
    }

    /// "All Products" or the selected category, capitalized.
    pub fn heading(&self) -> String {
        Listing::heading(&self.criteria)
    }

    /// The empty-result message, when loaded and nothing matches.
    pub fn empty_message(&self) -> Option<&'static str> {
        match self.listing() {
            Some(listing) if listing.is_empty() => Some(NO_MATCHES),
            _ => None,
        }
    }
}
