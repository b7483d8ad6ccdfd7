//! CLI command implementations.

pub mod cart;
pub mod categories;
pub mod config;
pub mod product;
pub mod products;
pub mod session;

use clap::{Args, Subcommand};
use shop_commerce::checkout::ShippingOption;
use shop_commerce::ProductId;

/// Arguments for the products command.
#[derive(Args)]
pub struct ProductsArgs {
    /// Only show this category ("all" for every category).
    #[arg(long)]
    pub category: Option<String>,

    /// Price bucket: 0-99, 100-199, 200-299, 300-399 or 400+.
    #[arg(long)]
    pub price: Option<String>,

    /// Sort order: featured, price-low, price-high, rating or name.
    #[arg(long)]
    pub sort: Option<String>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product ID.
    pub id: ProductId,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// List the products in this category instead.
    pub category: Option<String>,
}

/// Arguments for the cart command.
///
/// Actions are applied in a fixed order: adds, sets, removes, then clear.
#[derive(Args)]
pub struct CartArgs {
    /// Add a product: ID or ID:QTY (repeatable).
    #[arg(long = "add", value_name = "ID[:QTY]")]
    pub add: Vec<String>,

    /// Set a product's quantity: ID:QTY (repeatable). Zero removes it.
    #[arg(long = "set", value_name = "ID:QTY")]
    pub set: Vec<String>,

    /// Remove a product (repeatable).
    #[arg(long = "remove", value_name = "ID")]
    pub remove: Vec<ProductId>,

    /// Empty the cart after the other actions.
    #[arg(long)]
    pub clear: bool,

    /// Shipping option: free, express or pickup.
    #[arg(long, default_value = "free")]
    pub shipping: ShippingOption,
}

/// Arguments for the session command.
#[derive(Args)]
pub struct SessionArgs {
    /// Initial shipping option.
    #[arg(long, default_value = "free")]
    pub shipping: ShippingOption,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
