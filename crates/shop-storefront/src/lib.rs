//! Storefront pages.
//!
//! Each page owns the state its view renders: load status, user selections,
//! and the messages shown on failure. Rendering is left to the caller.
//!
//! - **ShopPage**: catalog listing with category, price and sort controls
//! - **ProductPage**: a single product and its quantity picker
//! - **CartPage**: line items, shipping choice and the summary
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_storefront::prelude::*;
//!
//! let client = CatalogClient::new()?;
//! let mut shop = ShopPage::new();
//! shop.load(&client).await;
//! shop.set_sort(SortOption::PriceAsc);
//! for product in shop.visible() {
//!     println!("{} {}", product.title, product.unit_price());
//! }
//! ```

pub mod cart;
pub mod product;
pub mod shop;
pub mod state;

pub use cart::{header_badge, CartPage};
pub use product::ProductPage;
pub use shop::ShopPage;
pub use state::PageState;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{header_badge, CartPage};
    pub use crate::product::ProductPage;
    pub use crate::shop::ShopPage;
    pub use crate::state::PageState;

    pub use shop_commerce::prelude::*;
    pub use shop_data::{CatalogClient, CatalogError, ImageAllowlist};
}
