//! Interactive shopping session.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};
use shop_data::ReqwestTransport;
use shop_storefront::prelude::*;

use super::SessionArgs;
use crate::context::Context;
use crate::render;

/// Main menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Browse,
    Category,
    Price,
    Sort,
    ClearFilters,
    ViewProduct,
    ViewCart,
    Quit,
}

impl MenuItem {
    const ALL: [MenuItem; 8] = [
        MenuItem::Browse,
        MenuItem::Category,
        MenuItem::Price,
        MenuItem::Sort,
        MenuItem::ClearFilters,
        MenuItem::ViewProduct,
        MenuItem::ViewCart,
        MenuItem::Quit,
    ];

    fn label(&self) -> &'static str {
        match self {
            MenuItem::Browse => "Browse products",
            MenuItem::Category => "Filter by category",
            MenuItem::Price => "Filter by price",
            MenuItem::Sort => "Sort",
            MenuItem::ClearFilters => "Clear all filters",
            MenuItem::ViewProduct => "View a product",
            MenuItem::ViewCart => "View cart",
            MenuItem::Quit => "Quit",
        }
    }
}

/// Cart page entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CartItem {
    Increase,
    Decrease,
    SetQuantity,
    Remove,
    Clear,
    Shipping,
    Back,
}

impl CartItem {
    const ALL: [CartItem; 7] = [
        CartItem::Increase,
        CartItem::Decrease,
        CartItem::SetQuantity,
        CartItem::Remove,
        CartItem::Clear,
        CartItem::Shipping,
        CartItem::Back,
    ];

    fn label(&self) -> &'static str {
        match self {
            CartItem::Increase => "Increase quantity",
            CartItem::Decrease => "Decrease quantity",
            CartItem::SetQuantity => "Set quantity",
            CartItem::Remove => "Remove item",
            CartItem::Clear => "Clear cart",
            CartItem::Shipping => "Choose shipping",
            CartItem::Back => "Back",
        }
    }
}

/// Session state: one catalog snapshot and one in-memory cart.
struct Session<'a> {
    ctx: &'a Context,
    client: CatalogClient<ReqwestTransport>,
    images: ImageAllowlist,
    shop: ShopPage,
    cart: Cart,
    cart_page: CartPage,
}

/// Run the session command.
pub async fn run(args: SessionArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The interactive session does not support --json");
    }

    let mut session = Session {
        ctx,
        client: ctx.client()?,
        images: ctx.images(),
        shop: ShopPage::new(),
        cart: Cart::new(),
        cart_page: CartPage::with_shipping(args.shipping),
    };

    let spinner = ctx.output.spinner("Loading products...");
    session.shop.load(&session.client).await;
    spinner.finish_and_clear();

    if let Some(message) = session.shop.state().error() {
        bail!("{}", message);
    }

    render::shop_page(&ctx.output, &session.shop);

    loop {
        let items: Vec<&str> = MenuItem::ALL.iter().map(|m| m.label()).collect();
        let selection = Select::new()
            .with_prompt(format!(
                "{} | {}",
                session.shop.heading(),
                render::cart_title(&session.cart)
            ))
            .items(&items)
            .default(0)
            .interact()?;

        match MenuItem::ALL[selection] {
            MenuItem::Browse => render::shop_page(&ctx.output, &session.shop),
            MenuItem::Category => session.choose_category()?,
            MenuItem::Price => session.choose_price()?,
            MenuItem::Sort => session.choose_sort()?,
            MenuItem::ClearFilters => {
                session.shop.clear_filters();
                render::shop_page(&ctx.output, &session.shop);
            }
            MenuItem::ViewProduct => session.view_product().await?,
            MenuItem::ViewCart => session.manage_cart()?,
            MenuItem::Quit => break,
        }
    }

    ctx.output.success(&format!(
        "Goodbye! {} item(s) left in the cart.",
        session.cart.total_items()
    ));

    Ok(())
}

impl Session<'_> {
    fn choose_category(&mut self) -> Result<()> {
        let mut labels = vec!["All Categories".to_string()];
        labels.extend(self.shop.categories().iter().map(|c| display_category(c)));

        let selection = Select::new()
            .with_prompt("Category")
            .items(&labels)
            .default(0)
            .interact()?;

        let category = match selection {
            0 => String::new(),
            n => self.shop.categories()[n - 1].clone(),
        };
        self.shop.set_category(&category);
        render::shop_page(&self.ctx.output, &self.shop);
        Ok(())
    }

    fn choose_price(&mut self) -> Result<()> {
        let mut labels = vec!["All Prices".to_string()];
        labels.extend(PriceRange::ALL.iter().map(|r| r.label()));

        let selection = Select::new()
            .with_prompt("Price")
            .items(&labels)
            .default(0)
            .interact()?;

        let range = match selection {
            0 => None,
            n => Some(PriceRange::ALL[n - 1]),
        };
        self.shop.set_price(range);
        render::shop_page(&self.ctx.output, &self.shop);
        Ok(())
    }

    fn choose_sort(&mut self) -> Result<()> {
        let labels: Vec<&str> = SortOption::ALL.iter().map(|s| s.display_name()).collect();
        let current = SortOption::ALL
            .iter()
            .position(|s| *s == self.shop.criteria().sort)
            .unwrap_or(0);

        let selection = Select::new()
            .with_prompt("Sort")
            .items(&labels)
            .default(current)
            .interact()?;

        self.shop.set_sort(SortOption::ALL[selection]);
        render::shop_page(&self.ctx.output, &self.shop);
        Ok(())
    }

    async fn view_product(&mut self) -> Result<()> {
        let visible = self.shop.visible();
        if visible.is_empty() {
            self.ctx.output.info(shop_storefront::shop::NO_MATCHES);
            return Ok(());
        }

        let mut labels: Vec<String> = visible
            .iter()
            .map(|p| format!("{} ({})", p.title, p.unit_price()))
            .collect();
        labels.push("Back".to_string());

        let selection = Select::new()
            .with_prompt("Product")
            .items(&labels)
            .default(0)
            .interact()?;
        let Some(product) = visible.get(selection) else {
            return Ok(());
        };

        let mut page = ProductPage::new(product.id);
        let spinner = self.ctx.output.spinner("Loading product...");
        page.load(&self.client).await;
        spinner.finish_and_clear();

        if page.product().is_none() {
            render::product_page(&self.ctx.output, &page, &self.images);
            return Ok(());
        }

        loop {
            render::product_page(&self.ctx.output, &page, &self.images);

            let actions = ["Add to cart", "Increase quantity", "Decrease quantity", "Back"];
            let choice = Select::new()
                .with_prompt(render::cart_title(&self.cart))
                .items(&actions)
                .default(0)
                .interact()?;

            match choice {
                0 => {
                    if page.add_to_cart(&mut self.cart) {
                        self.ctx.output.success(&format!(
                            "Added {} x {} to the cart",
                            page.quantity(),
                            product.title
                        ));
                    }
                    return Ok(());
                }
                1 => page.increment(),
                2 => page.decrement(),
                _ => return Ok(()),
            }
        }
    }

    fn manage_cart(&mut self) -> Result<()> {
        loop {
            render::cart_page(&self.ctx.output, &self.cart, &self.cart_page);
            if self.cart.is_empty() {
                return Ok(());
            }

            let labels: Vec<&str> = CartItem::ALL.iter().map(|c| c.label()).collect();
            let selection = Select::new()
                .with_prompt("Cart")
                .items(&labels)
                .default(CartItem::ALL.len() - 1)
                .interact()?;

            match CartItem::ALL[selection] {
                CartItem::Increase => {
                    if let Some(id) = self.pick_line_item()? {
                        self.cart_page.increment(&mut self.cart, id);
                    }
                }
                CartItem::Decrease => {
                    if let Some(id) = self.pick_line_item()? {
                        if !self.cart_page.decrement(&mut self.cart, id) {
                            self.ctx
                                .output
                                .warn("Quantity is already 1. Remove the item instead.");
                        }
                    }
                }
                CartItem::SetQuantity => {
                    if let Some(id) = self.pick_line_item()? {
                        let quantity: i64 = Input::new()
                            .with_prompt("Quantity (0 removes)")
                            .interact_text()?;
                        self.cart.update_quantity(id, quantity);
                    }
                }
                CartItem::Remove => {
                    if let Some(id) = self.pick_line_item()? {
                        self.cart_page.remove(&mut self.cart, id);
                    }
                }
                CartItem::Clear => {
                    let confirmed = Confirm::new()
                        .with_prompt("Remove every item from the cart?")
                        .default(false)
                        .interact()?;
                    if confirmed {
                        self.cart.clear();
                    }
                }
                CartItem::Shipping => self.choose_shipping()?,
                CartItem::Back => return Ok(()),
            }
        }
    }

    fn pick_line_item(&self) -> Result<Option<ProductId>> {
        let items = self.cart.items();
        let mut labels: Vec<String> = items
            .iter()
            .map(|i| format!("{} x {}", i.quantity, i.product.title))
            .collect();
        labels.push("Back".to_string());

        let selection = Select::new()
            .with_prompt("Item")
            .items(&labels)
            .default(0)
            .interact()?;

        Ok(items.get(selection).map(|i| i.product_id()))
    }

    fn choose_shipping(&mut self) -> Result<()> {
        let labels: Vec<String> = ShippingOption::ALL
            .iter()
            .map(|s| format!("{} ({})", s.label(), s.price_label()))
            .collect();
        let current = ShippingOption::ALL
            .iter()
            .position(|s| *s == self.cart_page.shipping())
            .unwrap_or(0);

        let selection = Select::new()
            .with_prompt("Shipping")
            .items(&labels)
            .default(current)
            .interact()?;

        self.cart_page.select_shipping(ShippingOption::ALL[selection]);
        Ok(())
    }
}
