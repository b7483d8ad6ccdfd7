//! Cart summary.

use crate::cart::Cart;
use crate::checkout::ShippingOption;
use crate::money::Money;
use serde::Serialize;

/// Subtotal, shipping and total for a cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartSummary {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Selected shipping option.
    pub shipping: ShippingOption,
    /// Subtotal plus the shipping adjustment.
    pub total: Money,
}

impl CartSummary {
    /// Summarize a cart with the given shipping option.
    pub fn new(cart: &Cart, shipping: ShippingOption) -> Self {
        let subtotal = cart.total_price();
        Self {
            subtotal,
            shipping,
            total: subtotal + shipping.price(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Product;

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(Product::new(1u64, "Backpack", 109.95, "men's clothing"), 1);
        cart.add(Product::new(2u64, "T-Shirt", 22.3, "men's clothing"), 2);
        cart
    }

    #[test]
    fn test_summary_free() {
        let summary = CartSummary::new(&cart(), ShippingOption::Free);
        assert_eq!(summary.subtotal, Money::usd(15455));
        assert_eq!(summary.total, Money::usd(15455));
    }

    #[test]
    fn test_summary_express_and_pickup() {
        let cart = cart();
        assert_eq!(
            CartSummary::new(&cart, ShippingOption::Express).total,
            Money::usd(16955)
        );
        assert_eq!(
            CartSummary::new(&cart, ShippingOption::Pickup).total,
            Money::usd(13355)
        );
    }

    #[test]
    fn test_summary_pickup_on_empty_cart_goes_negative() {
        let summary = CartSummary::new(&Cart::new(), ShippingOption::Pickup);
        assert_eq!(summary.total, Money::usd(-2100));
    }
}
