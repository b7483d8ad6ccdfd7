//! Product catalog module.
//!
//! Contains the product record published by the remote catalog and the
//! display helpers built on it.

mod category;
mod product;

pub use category::{category_heading, display_category, is_all_categories};
pub use product::{Product, Promotion, Rating};
