//! Product and rating types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Aggregate customer rating for a product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rating {
    /// Average score.
    #[serde(default)]
    pub rate: f64,
    /// Number of reviews behind the average.
    #[serde(default)]
    pub count: u64,
}

impl Rating {
    pub fn new(rate: f64, count: u64) -> Self {
        Self { rate, count }
    }

    /// Whole stars to fill when rendering a five-star row.
    pub fn filled_stars(&self) -> usize {
        self.rate.floor().clamp(0.0, 5.0) as usize
    }
}

/// A product as published by the catalog.
///
/// Products are immutable once fetched; the storefront never edits them,
/// it only copies them into cart line items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Catalog-assigned identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Price in dollars, as published.
    pub price: f64,
    /// Long description.
    #[serde(default)]
    pub description: String,
    /// Category label (e.g., "electronics").
    pub category: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Customer rating.
    #[serde(default)]
    pub rating: Rating,
}

impl Product {
    /// Create a product with an empty description, image and rating.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            price,
            description: String::new(),
            category: category.into(),
            image: String::new(),
            rating: Rating::default(),
        }
    }

    /// Set the rating.
    pub fn with_rating(mut self, rate: f64, count: u64) -> Self {
        self.rating = Rating::new(rate, count);
        self
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Unit price in cents.
    pub fn unit_price(&self) -> Money {
        Money::from_dollars(self.price)
    }

    /// Promotional badge for this product, if any.
    pub fn promotion(&self) -> Option<Promotion> {
        Promotion::for_product(self)
    }
}

/// A display-only promotion badge.
///
/// Every third product is advertised at half off, with the "original" price
/// shown as twice the real one. The promotion never changes what the cart
/// charges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Promotion {
    /// Advertised discount, in percent.
    pub percent_off: u8,
    /// Struck-through "was" price.
    pub original_price: Money,
}

impl Promotion {
    pub const PERCENT_OFF: u8 = 50;

    /// Compute the badge for a product.
    pub fn for_product(product: &Product) -> Option<Self> {
        if product.id.get() % 3 != 0 {
            return None;
        }
        Some(Self {
            percent_off: Self::PERCENT_OFF,
            original_price: product.unit_price().multiply(2),
        })
    }

    /// Badge text (e.g., "-50%").
    pub fn badge(&self) -> String {
        format!("-{}%", self.percent_off)
    }
}
