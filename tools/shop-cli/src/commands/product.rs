//! Product page command.

use anyhow::{bail, Result};
use shop_storefront::prelude::*;

use super::ProductArgs;
use crate::context::Context;
use crate::render;

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let mut page = ProductPage::new(args.id);

    let spinner = ctx.output.spinner(&format!("Loading product {}...", args.id));
    page.load(&client).await;
    spinner.finish_and_clear();

    let Some(product) = page.product() else {
        bail!("{}", page.state().error().unwrap_or(shop_storefront::product::LOAD_FAILED));
    };

    if ctx.output.is_json() {
        ctx.output.json(product);
        return Ok(());
    }

    render::product_page(&ctx.output, &page, &ctx.images());

    Ok(())
}
