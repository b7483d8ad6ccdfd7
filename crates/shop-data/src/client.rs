//! Remote catalog client.

use crate::transport::{ReqwestTransport, Transport};
use crate::CatalogError;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Serialize;
use shop_commerce::catalog::Product;
use shop_commerce::ProductId;
use tracing::{debug, warn};

/// Public catalog the storefront reads from.
pub const DEFAULT_BASE_URL: &str = "https://fakestoreapi.com";

/// Products and categories fetched together.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CatalogSnapshot {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
}

/// Read-only client for the product catalog.
///
/// Every call issues exactly one GET; nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct CatalogClient<T: Transport = ReqwestTransport> {
    base: Url,
    transport: T,
}

impl CatalogClient<ReqwestTransport> {
    /// Client for the public catalog.
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Client for a mirror or local stand-in.
    pub fn with_base_url(base_url: &str) -> Result<Self, CatalogError> {
        Self::with_transport(base_url, ReqwestTransport::new())
    }
}

impl<T: Transport> CatalogClient<T> {
    /// Client over an arbitrary transport.
    pub fn with_transport(base_url: &str, transport: T) -> Result<Self, CatalogError> {
        let base = Url::parse(base_url)
            .map_err(|e| CatalogError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(CatalogError::InvalidUrl(base_url.to_string()));
        }
        Ok(Self { base, transport })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// `GET /products`
    pub async fn get_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.fetch(&["products"]).await
    }

    /// `GET /products/{id}`
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.fetch(&["products", &id.to_string()]).await
    }

    /// `GET /products/categories`
    pub async fn get_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.fetch(&["products", "categories"]).await
    }

    /// `GET /products/category/{category}`, with the label percent-encoded.
    pub async fn get_products_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        self.fetch(&["products", "category", category]).await
    }

    /// Fetch products and categories concurrently.
    pub async fn load_catalog(&self) -> Result<CatalogSnapshot, CatalogError> {
        let (products, categories) =
            futures::try_join!(self.get_products(), self.get_categories())?;
        debug!(
            products = products.len(),
            categories = categories.len(),
            "Catalog loaded"
        );
        Ok(CatalogSnapshot {
            products,
            categories,
        })
    }

    fn url_for(&self, segments: &[&str]) -> Result<Url, CatalogError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| CatalogError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch<R: DeserializeOwned>(&self, segments: &[&str]) -> Result<R, CatalogError> {
        let url = self.url_for(segments)?;
        debug!(url = %url, "GET");

        let result = match self.transport.get(&url).await {
            Ok(response) => response.error_for_status().and_then(|r| r.json()),
            Err(e) => Err(e),
        };

        if let Err(e) = &result {
            warn!(url = %url, error = %e, "Catalog request failed");
        }
        result
    }
}
