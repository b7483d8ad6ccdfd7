//! Checkout module.
//!
//! Shipping options and the cart summary shown next to the (presentational)
//! checkout button. No orders are ever placed.

mod shipping;
mod summary;

pub use shipping::ShippingOption;
pub use summary::CartSummary;
