//! Commerce error types.

use thiserror::Error;

/// Errors that can occur while interpreting storefront input.
///
/// Cart operations themselves are total and never fail; these errors only
/// come from parsing user-supplied keys (sort keys, price buckets, shipping
/// options) into their typed forms.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// Unknown sort key.
    #[error("Unknown sort option: {0}")]
    UnknownSortOption(String),

    /// Unknown price bucket key.
    #[error("Unknown price range: {0}")]
    UnknownPriceRange(String),

    /// Unknown shipping option.
    #[error("Unknown shipping option: {0}")]
    UnknownShippingOption(String),

    /// Invalid product identifier.
    #[error("Invalid product id: {0}")]
    InvalidProductId(String),

    /// Invalid quantity in a `ID:QTY` pair.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}
