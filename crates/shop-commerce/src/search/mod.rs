//! Listing module.
//!
//! The shop page shows the catalog through a fixed pipeline: category
//! filter, then price bucket filter, then sort. The pipeline is pure and is
//! re-run in full whenever any criterion changes.

mod filter;
mod query;
mod results;

pub use filter::{CategoryFilter, PriceRange};
pub use query::{apply_listing, ListingCriteria, SortOption};
pub use results::Listing;
