//! Category commands.

use anyhow::{Context as _, Result};
use shop_commerce::catalog::category_heading;
use shop_storefront::prelude::*;
use shop_storefront::shop::LOAD_FAILED;

use super::CategoriesArgs;
use crate::context::Context;
use crate::render;

/// Run the categories command.
pub async fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    match args.category {
        Some(category) => list_products(&category, ctx).await,
        None => list_categories(ctx).await,
    }
}

async fn list_categories(ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    let spinner = ctx.output.spinner("Loading categories...");
    let result = client.get_categories().await;
    spinner.finish_and_clear();
    let categories = result.context(LOAD_FAILED)?;

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &categories {
        ctx.output.list_item(&format!(
            "{}  {}",
            display_category(category),
            console::style(format!("(shop categories \"{}\")", category)).dim()
        ));
    }

    Ok(())
}

async fn list_products(category: &str, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    let spinner = ctx.output.spinner(&format!("Loading {}...", display_category(category)));
    let result = client.get_products_by_category(category).await;
    spinner.finish_and_clear();
    let products = result.context(LOAD_FAILED)?;

    if ctx.output.is_json() {
        ctx.output.json(&products);
        return Ok(());
    }

    ctx.output.header(&category_heading(Some(category)));
    if products.is_empty() {
        ctx.output.info(shop_storefront::shop::NO_MATCHES);
        return Ok(());
    }

    render::product_table(&ctx.output, &products);

    Ok(())
}
