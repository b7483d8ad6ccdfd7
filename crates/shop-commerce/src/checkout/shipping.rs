//! Shipping options.

use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A shipping option offered on the cart page.
///
/// Pick-up carries a negative price: it is a discount on the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShippingOption {
    #[default]
    Free,
    Express,
    Pickup,
}

impl ShippingOption {
    /// All options, in display order.
    pub const ALL: [ShippingOption; 3] = [
        ShippingOption::Free,
        ShippingOption::Express,
        ShippingOption::Pickup,
    ];

    /// Stable key (e.g., "express").
    pub fn key(&self) -> &'static str {
        match self {
            ShippingOption::Free => "free",
            ShippingOption::Express => "express",
            ShippingOption::Pickup => "pickup",
        }
    }

    /// Display name.
    pub fn label(&self) -> &'static str {
        match self {
            ShippingOption::Free => "Free shipping",
            ShippingOption::Express => "Express shipping",
            ShippingOption::Pickup => "Pick Up",
        }
    }

    /// Price adjustment applied to the cart subtotal.
    pub fn price(&self) -> Money {
        match self {
            ShippingOption::Free => Money::usd(0),
            ShippingOption::Express => Money::usd(1500),
            ShippingOption::Pickup => Money::usd(-2100),
        }
    }

    /// Adjustment as shown next to the option (e.g., "+$15.00").
    pub fn price_label(&self) -> String {
        self.price().display_signed()
    }

    /// Check if this is free shipping.
    pub fn is_free(&self) -> bool {
        self.price().is_zero()
    }
}

impl fmt::Display for ShippingOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ShippingOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CommerceError::UnknownShippingOption(s.to_string()))
    }
}
