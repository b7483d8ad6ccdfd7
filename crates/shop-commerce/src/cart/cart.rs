//! Cart, line items and the cart reducer.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A line item in the cart.
///
/// Invariant: `quantity` is strictly positive. A line item that would drop
/// to zero is removed instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// The product, as it was when added.
    pub product: Product,
    /// Quantity.
    pub quantity: i64,
}

impl LineItem {
    /// Product identifier (the uniqueness key within a cart).
    pub fn product_id(&self) -> ProductId {
        self.product.id
    }

    /// Published price times quantity, rounded to cents once.
    pub fn total(&self) -> Money {
        Money::from_dollars(self.product.price * self.quantity as f64)
    }
}

/// A cart mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum CartAction {
    /// Add `quantity` of a product, merging into an existing line item.
    Add { product: Product, quantity: i64 },
    /// Drop the line item for a product.
    Remove { product_id: ProductId },
    /// Replace a line item's quantity; zero or less removes it.
    UpdateQuantity { product_id: ProductId, quantity: i64 },
    /// Empty the cart.
    Clear,
}

impl CartAction {
    fn name(&self) -> &'static str {
        match self {
            CartAction::Add { .. } => "add",
            CartAction::Remove { .. } => "remove",
            CartAction::UpdateQuantity { .. } => "update_quantity",
            CartAction::Clear => "clear",
        }
    }
}

/// Apply one action to a cart's line items.
///
/// Total: every action succeeds, and actions naming a product that is not
/// in the cart are no-ops (except `Add`, which appends). A non-positive
/// quantity on `Add` counts as 1.
pub fn reduce(mut items: Vec<LineItem>, action: CartAction) -> Vec<LineItem> {
    match action {
        CartAction::Add { product, quantity } => {
            let quantity = if quantity > 0 { quantity } else { 1 };
            match items.iter_mut().find(|i| i.product.id == product.id) {
                Some(existing) => {
                    existing.quantity = existing.quantity.saturating_add(quantity);
                }
                None => items.push(LineItem { product, quantity }),
            }
            items
        }
        CartAction::Remove { product_id } => {
            items.retain(|i| i.product.id != product_id);
            items
        }
        CartAction::UpdateQuantity {
            product_id,
            quantity,
        } => {
            if quantity <= 0 {
                items.retain(|i| i.product.id != product_id);
            } else if let Some(item) = items.iter_mut().find(|i| i.product.id == product_id) {
                item.quantity = quantity;
            }
            items
        }
        CartAction::Clear => Vec::new(),
    }
}

/// An in-memory shopping cart.
///
/// Created empty, lives as long as the session, never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply an action.
    pub fn dispatch(&mut self, action: CartAction) {
        let name = action.name();
        let items = std::mem::take(&mut self.items);
        self.items = reduce(items, action);
        debug!(
            action = name,
            line_items = self.items.len(),
            total_items = self.total_items(),
            "cart updated"
        );
    }

    /// Add `quantity` of a product.
    pub fn add(&mut self, product: Product, quantity: i64) {
        self.dispatch(CartAction::Add { product, quantity });
    }

    /// Remove a product's line item, if present.
    pub fn remove(&mut self, product_id: ProductId) {
        self.dispatch(CartAction::Remove { product_id });
    }

    /// Set a product's quantity; zero or less removes it.
    pub fn update_quantity(&mut self, product_id: ProductId, quantity: i64) {
        self.dispatch(CartAction::UpdateQuantity {
            product_id,
            quantity,
        });
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get the line item for a product.
    pub fn get(&self, product_id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Sum of all quantities.
    pub fn total_items(&self) -> i64 {
        self.items
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.quantity))
    }

    /// Sum of line totals.
    pub fn total_price(&self) -> Money {
        self.items
            .iter()
            .map(LineItem::total)
            .sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
