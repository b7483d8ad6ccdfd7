//! Product page: one product with a quantity picker.

use crate::state::PageState;
use shop_commerce::prelude::*;
use shop_data::{CatalogClient, Transport};
use tracing::warn;

/// Shown when the catalog has no such product.
pub const NOT_FOUND: &str = "Product not found";

/// Shown for any other load failure.
pub const LOAD_FAILED: &str = "Failed to load product. Please try again later.";

/// The product detail page.
#[derive(Debug, Clone)]
pub struct ProductPage {
    id: ProductId,
    state: PageState<Product>,
    quantity: i64,
}

impl ProductPage {
    pub fn new(id: ProductId) -> Self {
        Self {
            id,
            state: PageState::Loading,
            quantity: 1,
        }
    }

    /// Fetch the product.
    ///
    /// A 404 renders the not-found fallback; anything else the generic
    /// failure message.
    pub async fn load<T: Transport>(&mut self, client: &CatalogClient<T>) {
        self.state = PageState::Loading;
        self.state = match client.get_product(self.id).await {
            Ok(product) => PageState::Ready(product),
            Err(e) if e.is_not_found() => {
                warn!(id = %self.id, "Product not found");
                PageState::Failed(NOT_FOUND.to_string())
            }
            Err(e) => {
                warn!(id = %self.id, error = %e, "Product page failed to load");
                PageState::Failed(LOAD_FAILED.to_string())
            }
        };
    }

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn state(&self) -> &PageState<Product> {
        &self.state
    }

    pub fn product(&self) -> Option<&Product> {
        self.state.ready()
    }

    /// Selected quantity, never below 1.
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.quantity = (self.quantity - 1).max(1);
    }

    /// Set the quantity directly; values below 1 clamp to 1.
    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity.max(1);
    }

    /// Add the selected quantity to the cart.
    ///
    /// Returns `false` when there is no loaded product to add.
    pub fn add_to_cart(&self, cart: &mut Cart) -> bool {
        match self.product() {
            Some(product) => {
                cart.dispatch(CartAction::Add {
                    product: product.clone(),
                    quantity: self.quantity,
                });
                true
            }
            None => false,
        }
    }
}
