//! Scripted cart command.

use std::collections::BTreeMap;

use anyhow::{bail, Context as _, Result};
use shop_commerce::ids::parse_id_quantity;
use shop_data::{CatalogClient, Transport};
use shop_storefront::prelude::*;

use super::CartArgs;
use crate::context::Context;
use crate::output::Output;
use crate::render::{self, CartView};

/// Run the cart command.
pub async fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let cart = build_cart(&args, &client, &ctx.output).await?;
    let page = CartPage::with_shipping(args.shipping);

    if ctx.output.is_json() {
        ctx.output.json(&CartView::new(&cart, &page));
        return Ok(());
    }

    render::cart_page(&ctx.output, &cart, &page);

    Ok(())
}

/// Apply the requested actions to a fresh cart: adds, then sets, then
/// removes, then clear.
async fn build_cart<T: Transport>(
    args: &CartArgs,
    client: &CatalogClient<T>,
    output: &Output,
) -> Result<Cart> {
    let adds = args
        .add
        .iter()
        .map(|s| parse_id_quantity(s, 1).with_context(|| format!("Bad --add value: {}", s)))
        .collect::<Result<Vec<_>>>()?;
    let sets = args
        .set
        .iter()
        .map(|s| parse_set(s))
        .collect::<Result<Vec<_>>>()?;

    let mut cart = Cart::new();

    if !adds.is_empty() {
        let spinner = output.spinner("Loading products...");
        let pages = load_products(client, adds.iter().map(|(id, _)| *id)).await;
        spinner.finish_and_clear();
        let mut pages = pages?;

        for (id, quantity) in adds {
            if let Some(page) = pages.get_mut(&id) {
                page.set_quantity(quantity);
                page.add_to_cart(&mut cart);
            }
        }
    }

    for (id, quantity) in sets {
        if cart.get(id).is_none() {
            output.warn(&format!("Product {} is not in the cart", id));
        }
        cart.update_quantity(id, quantity);
    }

    for &id in &args.remove {
        if cart.get(id).is_none() {
            output.warn(&format!("Product {} is not in the cart", id));
        }
        cart.remove(id);
    }

    if args.clear {
        cart.clear();
    }

    Ok(cart)
}

/// Load each distinct product once, concurrently.
async fn load_products<T: Transport>(
    client: &CatalogClient<T>,
    ids: impl Iterator<Item = ProductId>,
) -> Result<BTreeMap<ProductId, ProductPage>> {
    let mut pages: BTreeMap<ProductId, ProductPage> =
        ids.map(|id| (id, ProductPage::new(id))).collect();

    futures::future::join_all(pages.values_mut().map(|page| page.load(client))).await;

    for page in pages.values() {
        if let Some(message) = page.state().error() {
            bail!("{} (product {})", message, page.id());
        }
    }

    Ok(pages)
}

/// Parse an `ID:QTY` pair; the quantity is required.
fn parse_set(s: &str) -> Result<(ProductId, i64)> {
    if !s.contains(':') {
        bail!("Bad --set value: {} (expected ID:QTY)", s);
    }
    parse_id_quantity(s, 0).with_context(|| format!("Bad --set value: {}", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use shop_data::{StaticTransport, DEFAULT_BASE_URL};

    fn catalog_client() -> CatalogClient<StaticTransport> {
        let transport = StaticTransport::new()
            .with_json(
                "/products/1",
                json!({ "id": 1, "title": "Backpack", "price": 109.95, "category": "men's clothing" }),
            )
            .with_json(
                "/products/2",
                json!({ "id": 2, "title": "T-Shirt", "price": 22.3, "category": "men's clothing" }),
            );
        CatalogClient::with_transport(DEFAULT_BASE_URL, transport).unwrap()
    }

    fn cart_args(add: &[&str], set: &[&str], remove: &[u64], clear: bool) -> CartArgs {
        CartArgs {
            add: add.iter().map(|s| s.to_string()).collect(),
            set: set.iter().map(|s| s.to_string()).collect(),
            remove: remove.iter().copied().map(ProductId::new).collect(),
            clear,
            shipping: ShippingOption::Free,
        }
    }

    fn quantities(cart: &Cart) -> Vec<(u64, i64)> {
        cart.items()
            .iter()
            .map(|i| (i.product_id().get(), i.quantity))
            .collect()
    }

    #[tokio::test]
    async fn test_build_cart_applies_adds_then_sets_then_removes() {
        let client = catalog_client();
        let output = Output::new(0, true);

        // Sets see the added lines, and removes run after sets.
        let args = cart_args(&["1:2", "2", "1"], &["2:5", "1:4"], &[1], false);
        let cart = build_cart(&args, &client, &output).await.unwrap();
        assert_eq!(quantities(&cart), vec![(2, 5)]);

        let args = cart_args(&["1:2"], &["1:0"], &[], false);
        let cart = build_cart(&args, &client, &output).await.unwrap();
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_build_cart_clear_runs_last() {
        let client = catalog_client();
        let output = Output::new(0, true);

        let args = cart_args(&["1:2", "2:1"], &["2:3"], &[], true);
        let cart = build_cart(&args, &client, &output).await.unwrap();
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn test_build_cart_without_adds_makes_no_requests() {
        let client = catalog_client();
        let output = Output::new(0, true);

        let args = cart_args(&[], &["1:3"], &[2], false);
        let cart = build_cart(&args, &client, &output).await.unwrap();
        assert!(cart.is_empty());
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_build_cart_rejects_bad_set() {
        let client = catalog_client();
        let output = Output::new(0, true);

        let args = cart_args(&["1"], &["1"], &[], false);
        let err = build_cart(&args, &client, &output).await.unwrap_err();
        assert!(err.to_string().contains("expected ID:QTY"));
    }

    #[test]
    fn test_parse_set() {
        assert_eq!(parse_set("3:0").unwrap(), (ProductId::new(3), 0));
        assert!(parse_set("3").is_err());
        assert!(parse_set("x:1").is_err());
    }

    #[tokio::test]
    async fn test_load_products_fetches_each_id_once() {
        let transport = StaticTransport::new()
            .with_json(
                "/products/1",
                json!({ "id": 1, "title": "Backpack", "price": 109.95, "category": "men's clothing" }),
            )
            .with_json(
                "/products/2",
                json!({ "id": 2, "title": "T-Shirt", "price": 22.3, "category": "men's clothing" }),
            );
        let client = CatalogClient::with_transport(DEFAULT_BASE_URL, transport).unwrap();

        let ids = [1u64, 2, 1].into_iter().map(ProductId::new);
        let pages = load_products(&client, ids).await.unwrap();

        assert_eq!(pages.len(), 2);
        let mut requests = client.transport().requests();
        requests.sort();
        assert_eq!(requests, vec!["/products/1", "/products/2"]);
    }

    #[tokio::test]
    async fn test_load_products_reports_missing_product() {
        let client = CatalogClient::with_transport(DEFAULT_BASE_URL, StaticTransport::new()).unwrap();

        let err = load_products(&client, std::iter::once(ProductId::new(99)))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Product not found (product 99)");
    }
}
