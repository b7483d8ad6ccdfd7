//! Shop page command.

use anyhow::{bail, Result};
use shop_storefront::prelude::*;

use super::ProductsArgs;
use crate::context::Context;
use crate::render;

/// Run the products command.
pub async fn run(args: ProductsArgs, ctx: &Context) -> Result<()> {
    let criteria = ListingCriteria::from_keys(
        args.category.as_deref().unwrap_or_default(),
        args.price.as_deref().unwrap_or_default(),
        args.sort.as_deref().unwrap_or_default(),
    )?;

    let client = ctx.client()?;
    let mut page = ShopPage::with_criteria(criteria);

    let spinner = ctx.output.spinner("Loading products...");
    page.load(&client).await;
    spinner.finish_and_clear();

    if let Some(message) = page.state().error() {
        bail!("{}", message);
    }

    if let Some(label) = page.criteria().category.label() {
        if !page.categories().iter().any(|c| c == label) {
            ctx.output.warn(&format!("Unknown category: {}", label));
        }
    }

    if ctx.output.is_json() {
        ctx.output.json(&page.visible());
        return Ok(());
    }

    render::shop_page(&ctx.output, &page);

    Ok(())
}
