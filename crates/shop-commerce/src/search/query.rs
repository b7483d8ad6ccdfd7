//! Listing criteria and the filter/sort pipeline.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::search::{CategoryFilter, PriceRange};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort options for the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortOption {
    /// Catalog order, untouched.
    #[default]
    Featured,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by highest rated.
    Rating,
    /// Sort by title A-Z.
    NameAsc,
}

impl SortOption {
    /// All options, in display order.
    pub const ALL: [SortOption; 5] = [
        SortOption::Featured,
        SortOption::PriceAsc,
        SortOption::PriceDesc,
        SortOption::Rating,
        SortOption::NameAsc,
    ];

    /// Stable key (e.g., "price-high").
    pub fn key(&self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::PriceAsc => "price-low",
            SortOption::PriceDesc => "price-high",
            SortOption::Rating => "rating",
            SortOption::NameAsc => "name",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Featured => "Sort by",
            SortOption::PriceAsc => "Price: Low to High",
            SortOption::PriceDesc => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
            SortOption::NameAsc => "Name: A to Z",
        }
    }

    /// Order two products, or `None` to keep catalog order.
    fn compare(&self, a: &Product, b: &Product) -> Option<Ordering> {
        match self {
            SortOption::Featured => None,
            SortOption::PriceAsc => Some(a.price.total_cmp(&b.price)),
            SortOption::PriceDesc => Some(b.price.total_cmp(&a.price)),
            SortOption::Rating => Some(b.rating.rate.total_cmp(&a.rating.rate)),
            SortOption::NameAsc => Some(
                a.title
                    .to_lowercase()
                    .cmp(&b.title.to_lowercase())
                    .then_with(|| a.title.cmp(&b.title)),
            ),
        }
    }

    /// Stable-sort products in place.
    pub fn sort(&self, products: &mut [Product]) {
        if *self == SortOption::Featured {
            return;
        }
        products.sort_by(|a, b| self.compare(a, b).unwrap_or(Ordering::Equal));
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.key() == s.trim())
            .ok_or_else(|| CommerceError::UnknownSortOption(s.to_string()))
    }
}

/// Everything the shop page filters and sorts by.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListingCriteria {
    pub category: CategoryFilter,
    pub price: Option<PriceRange>,
    pub sort: SortOption,
}

impl ListingCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse criteria from their string keys, as the shop page receives them.
    pub fn from_keys(category: &str, price: &str, sort: &str) -> Result<Self, CommerceError> {
        Ok(Self {
            category: CategoryFilter::from_label(category),
            price: PriceRange::parse_optional(price)?,
            sort: if sort.trim().is_empty() {
                SortOption::Featured
            } else {
                sort.parse()?
            },
        })
    }

    pub fn with_category(mut self, label: &str) -> Self {
        self.category = CategoryFilter::from_label(label);
        self
    }

    pub fn with_price(mut self, range: Option<PriceRange>) -> Self {
        self.price = range;
        self
    }

    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Reset to every category, every price, catalog order.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether a product passes both filters.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product) && self.price.map_or(true, |r| r.matches(product))
    }

    /// Whether any criterion differs from the defaults.
    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }
}

/// Run the listing pipeline: category, then price bucket, then sort.
///
/// The input is left untouched; the result is a fresh vector.
pub fn apply_listing(products: &[Product], criteria: &ListingCriteria) -> Vec<Product> {
    let mut visible: Vec<Product> = products
        .iter()
        .filter(|p| criteria.category.matches(p))
        .filter(|p| criteria.price.map_or(true, |r| r.matches(p)))
        .cloned()
        .collect();
    criteria.sort.sort(&mut visible);
    visible
}
