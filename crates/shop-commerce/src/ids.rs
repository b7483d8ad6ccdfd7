//! Product identifier.
//!
//! Identifiers are assigned by the remote catalog as plain integers. The
//! newtype keeps them from being mixed up with quantities, which are also
//! integers and travel next to them everywhere in the cart.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A catalog product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create an ID from its numeric value.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for ProductId {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| CommerceError::InvalidProductId(s.to_string()))
    }
}

/// Parse an `ID[:QTY]` pair as used on the command line.
///
/// A missing quantity defaults to `default_quantity`. Quantities may be zero
/// or negative; what that means is up to the cart action they feed.
pub fn parse_id_quantity(s: &str, default_quantity: i64) -> Result<(ProductId, i64), CommerceError> {
    match s.split_once(':') {
        Some((id, qty)) => {
            let id = id.parse()?;
            let qty = qty
                .trim()
                .parse::<i64>()
                .map_err(|_| CommerceError::InvalidQuantity(qty.to_string()))?;
            Ok((id, qty))
        }
        None => Ok((s.parse()?, default_quantity)),
    }
}
