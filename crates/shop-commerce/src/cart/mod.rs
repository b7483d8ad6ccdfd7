//! Shopping cart module.
//!
//! The cart is an ordered list of line items that only changes through
//! [`CartAction`]s fed to [`reduce`].

mod cart;

pub use cart::{reduce, Cart, CartAction, LineItem};
