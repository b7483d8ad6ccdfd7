//! Cart page and header badge.

use shop_commerce::prelude::*;

/// Shown when the cart has no line items.
pub const EMPTY_CART: &str = "Your cart is empty";

/// Header cart badge text: hidden at zero, capped at "9+".
pub fn header_badge(total_items: i64) -> Option<String> {
    match total_items {
        n if n <= 0 => None,
        n if n > 9 => Some("9+".to_string()),
        n => Some(n.to_string()),
    }
}

/// The cart page: the shopper's cart plus the chosen shipping option.
///
/// Quantity controls go through the cart reducer; the page only refuses to
/// decrement below 1 (removal is a separate action).
#[derive(Debug, Clone, Default)]
pub struct CartPage {
    shipping: ShippingOption,
}

impl CartPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_shipping(shipping: ShippingOption) -> Self {
        Self { shipping }
    }

    pub fn shipping(&self) -> ShippingOption {
        self.shipping
    }

    pub fn select_shipping(&mut self, shipping: ShippingOption) {
        self.shipping = shipping;
    }

    /// The empty-cart message, when there is nothing to show.
    pub fn empty_message(&self, cart: &Cart) -> Option<&'static str> {
        cart.is_empty().then_some(EMPTY_CART)
    }

    pub fn summary(&self, cart: &Cart) -> CartSummary {
        CartSummary::new(cart, self.shipping)
    }

    /// Whether the decrement control is enabled for a line item.
    pub fn can_decrement(item: &LineItem) -> bool {
        item.quantity > 1
    }

    pub fn increment(&self, cart: &mut Cart, product_id: ProductId) {
        if let Some(quantity) = cart.get(product_id).map(|i| i.quantity) {
            cart.update_quantity(product_id, quantity.saturating_add(1));
        }
    }

    /// Decrease a line item by one. Does nothing at quantity 1.
    pub fn decrement(&self, cart: &mut Cart, product_id: ProductId) -> bool {
        let quantity = match cart.get(product_id) {
            Some(item) if Self::can_decrement(item) => item.quantity,
            _ => return false,
        };
        cart.update_quantity(product_id, quantity - 1);
        true
    }

    pub fn remove(&self, cart: &mut Cart, product_id: ProductId) {
        cart.remove(product_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(Product::new(1u64, "Backpack", 109.95, "men's clothing"), 1);
        cart.add(Product::new(2u64, "T-Shirt", 22.3, "men's clothing"), 2);
        cart
    }

    #[test]
    fn test_header_badge() {
        assert_eq!(header_badge(0), None);
        assert_eq!(header_badge(1).as_deref(), Some("1"));
        assert_eq!(header_badge(9).as_deref(), Some("9"));
        assert_eq!(header_badge(10).as_deref(), Some("9+"));
        assert_eq!(header_badge(250).as_deref(), Some("9+"));
    }

    #[test]
    fn test_empty_cart() {
        let page = CartPage::new();
        assert_eq!(page.empty_message(&Cart::new()), Some(EMPTY_CART));
        assert_eq!(page.empty_message(&cart()), None);
    }

    #[test]
    fn test_decrement_stops_at_one() {
        let page = CartPage::new();
        let mut cart = cart();
        let backpack = ProductId::new(1);

        assert!(!page.decrement(&mut cart, backpack));
        assert_eq!(cart.get(backpack).unwrap().quantity, 1);

        page.increment(&mut cart, backpack);
        assert!(page.decrement(&mut cart, backpack));
        assert_eq!(cart.get(backpack).unwrap().quantity, 1);
    }

    #[test]
    fn test_missing_line_item_is_ignored() {
        let page = CartPage::new();
        let mut cart = cart();
        page.increment(&mut cart, ProductId::new(42));
        assert!(!page.decrement(&mut cart, ProductId::new(42)));
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_summary_follows_shipping() {
        let mut page = CartPage::new();
        let cart = cart();
        assert_eq!(page.summary(&cart).total, Money::usd(15455));

        page.select_shipping(ShippingOption::Express);
        assert_eq!(page.summary(&cart).total, Money::usd(16955));

        page.select_shipping(ShippingOption::Pickup);
        assert_eq!(page.summary(&cart).total, Money::usd(13355));
    }

    #[test]
    fn test_remove_keeps_shipping() {
        let page = CartPage::with_shipping(ShippingOption::Express);
        let mut cart = cart();
        page.remove(&mut cart, ProductId::new(1));

        assert!(cart.get(ProductId::new(1)).is_none());
        assert_eq!(page.shipping(), ShippingOption::Express);
        assert_eq!(page.summary(&cart).subtotal, Money::usd(4460));
    }
}
