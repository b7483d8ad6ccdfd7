//! Remote data access for the storefront.
//!
//! Provides a read-only client for the product catalog and the allowlist
//! that decides which product images may be rendered.
//!
//! # Example
//!
//! ```rust,ignore
//! use shop_data::CatalogClient;
//!
//! let client = CatalogClient::new()?;
//!
//! // Products and categories in one round trip pair
//! let snapshot = client.load_catalog().await?;
//!
//! // A single product; a missing id is an HTTP 404
//! match client.get_product(ProductId::new(7)).await {
//!     Ok(product) => println!("{}", product.title),
//!     Err(e) if e.is_not_found() => println!("Product not found"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

mod client;
mod error;
pub mod images;
mod response;
pub mod transport;

pub use client::{CatalogClient, CatalogSnapshot, DEFAULT_BASE_URL};
pub use error::CatalogError;
pub use images::{AllowlistError, ImageAllowlist, RemotePattern};
pub use response::Response;
pub use transport::{ReqwestTransport, Transport};

#[cfg(any(test, feature = "test-util"))]
pub use transport::StaticTransport;
