//! Terminal rendering of the storefront pages.

use console::style;
use serde::Serialize;
use shop_storefront::prelude::*;

use crate::output::{cell, stars, Output};

const LISTING_WIDTHS: [usize; 6] = [4, 40, 18, 10, 18, 5];

/// Render a product listing as a table.
pub fn product_table(out: &Output, products: &[Product]) {
    out.table_row(
        &["ID", "TITLE", "CATEGORY", "PRICE", "RATING", ""],
        &LISTING_WIDTHS,
    );
    for product in products {
        out.table_row(
            &[
                product.id.to_string(),
                cell(&product.title, LISTING_WIDTHS[1]),
                cell(&display_category(&product.category), LISTING_WIDTHS[2]),
                product.unit_price().to_string(),
                rating(&product.rating),
                product.promotion().map(|p| p.badge()).unwrap_or_default(),
            ],
            &LISTING_WIDTHS,
        );
    }
}

/// Render the shop page: heading, result count and the visible products.
pub fn shop_page(out: &Output, page: &ShopPage) {
    out.header(&page.heading());

    if let Some(label) = page.result_label() {
        out.line(&style(label).dim().to_string());
    }

    if let Some(message) = page.empty_message() {
        out.info(message);
        out.info("Clear all filters to see every product.");
        return;
    }

    product_table(out, &page.visible());
}

/// Render the product page.
pub fn product_page(out: &Output, page: &ProductPage, images: &ImageAllowlist) {
    let Some(product) = page.product() else {
        if let Some(message) = page.state().error() {
            out.warn(message);
        }
        return;
    };

    out.header(&product.title);
    match product.promotion() {
        Some(promo) => out.kv(
            "Price",
            &format!(
                "{}  {}  {}",
                style(product.unit_price()).bold(),
                style(format!("was {}", promo.original_price)).dim(),
                style(promo.badge()).red()
            ),
        ),
        None => out.kv("Price", &style(product.unit_price()).bold().to_string()),
    }
    out.kv("Rating", &rating(&product.rating));
    out.kv("Category", &display_category(&product.category));
    out.kv("Image", images.display(&product.image));
    out.kv("Quantity", &page.quantity().to_string());

    if !product.description.is_empty() {
        out.line("");
        out.line(&product.description);
    }
}

/// Render the cart page.
pub fn cart_page(out: &Output, cart: &Cart, page: &CartPage) {
    out.header(&cart_title(cart));

    if let Some(message) = page.empty_message(cart) {
        out.info(message);
        return;
    }

    let widths = [4, 40, 9, 10, 10];
    out.table_row(&["ID", "TITLE", "QTY", "PRICE", "TOTAL"], &widths);
    for item in cart.items() {
        out.table_row(
            &[
                item.product_id().to_string(),
                cell(&item.product.title, widths[1]),
                quantity_control(item),
                item.product.unit_price().to_string(),
                item.total().to_string(),
            ],
            &widths,
        );
    }

    let summary = page.summary(cart);
    out.line("");
    out.kv("Subtotal", &summary.subtotal.to_string());
    out.kv(
        "Shipping",
        &format!("{} ({})", summary.shipping.label(), summary.shipping.price_label()),
    );
    out.kv("Total", &style(summary.total).bold().to_string());
}

/// "Cart", "Cart (3)" or "Cart (9+)".
pub fn cart_title(cart: &Cart) -> String {
    match header_badge(cart.total_items()) {
        Some(badge) => format!("Cart ({})", badge),
        None => "Cart".to_string(),
    }
}

/// Cart as printed in JSON mode.
#[derive(Serialize)]
pub struct CartView<'a> {
    pub items: &'a [LineItem],
    pub total_items: i64,
    pub badge: Option<String>,
    pub summary: CartSummary,
}

impl<'a> CartView<'a> {
    pub fn new(cart: &'a Cart, page: &CartPage) -> Self {
        Self {
            items: cart.items(),
            total_items: cart.total_items(),
            badge: header_badge(cart.total_items()),
            summary: page.summary(cart),
        }
    }
}

/// "- 2 +", with the minus hidden where decrementing is disabled.
fn quantity_control(item: &LineItem) -> String {
    let minus = if CartPage::can_decrement(item) { "-" } else { " " };
    format!("{} {} +", minus, item.quantity)
}

fn rating(rating: &Rating) -> String {
    format!(
        "{} {:.1} ({})",
        stars(rating.filled_stars()),
        rating.rate,
        rating.count
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_title() {
        let mut cart = Cart::new();
        assert_eq!(cart_title(&cart), "Cart");

        cart.add(Product::new(1u64, "Backpack", 109.95, "men's clothing"), 3);
        assert_eq!(cart_title(&cart), "Cart (3)");

        cart.add(Product::new(2u64, "T-Shirt", 22.3, "men's clothing"), 7);
        assert_eq!(cart_title(&cart), "Cart (9+)");
    }

    #[test]
    fn test_cart_view_json() {
        let mut cart = Cart::new();
        cart.add(Product::new(2u64, "T-Shirt", 22.3, "men's clothing"), 2);
        let page = CartPage::with_shipping(ShippingOption::Express);

        let json = serde_json::to_value(CartView::new(&cart, &page)).unwrap();
        assert_eq!(json["total_items"], 2);
        assert_eq!(json["badge"], "2");
        assert_eq!(json["summary"]["shipping"], "express");
        assert_eq!(json["items"][0]["product"]["id"], 2);
    }

    #[test]
    fn test_quantity_control() {
        let mut cart = Cart::new();
        cart.add(Product::new(1u64, "Backpack", 109.95, "men's clothing"), 1);
        cart.add(Product::new(2u64, "T-Shirt", 22.3, "men's clothing"), 2);

        assert_eq!(quantity_control(&cart.items()[0]), "  1 +");
        assert_eq!(quantity_control(&cart.items()[1]), "- 2 +");
    }

    #[test]
    fn test_rating_text() {
        let text = rating(&Rating::new(3.9, 120));
        assert_eq!(text, "★★★☆☆ 3.9 (120)");
    }
}
