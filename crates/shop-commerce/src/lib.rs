//! Storefront domain types and logic.
//!
//! This crate holds everything the storefront computes locally, with no I/O:
//!
//! - **Catalog**: products as returned by the remote catalog, ratings, promo badges
//! - **Cart**: line items mutated through a single reducer, derived totals
//! - **Search**: the category → price range → sort listing pipeline
//! - **Checkout**: shipping options and the cart summary
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_commerce::prelude::*;
//!
//! let mut cart = Cart::new();
//! cart.add(product.clone(), 2);
//! cart.add(product, 3);
//! assert_eq!(cart.total_items(), 5);
//!
//! let summary = CartSummary::new(&cart, ShippingOption::Express);
//! println!("Total: {}", summary.total);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod search;

pub use error::CommerceError;
pub use ids::ProductId;
pub use money::Money;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::ProductId;
    pub use crate::money::Money;

    // Catalog
    pub use crate::catalog::{display_category, Product, Promotion, Rating};

    // Cart
    pub use crate::cart::{reduce, Cart, CartAction, LineItem};

    // Checkout
    pub use crate::checkout::{CartSummary, ShippingOption};

    // Search
    pub use crate::search::{apply_listing, CategoryFilter, Listing, ListingCriteria, PriceRange, SortOption};
}
