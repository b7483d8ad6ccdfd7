//! Listing results.

use crate::catalog::{category_heading, Product};
use crate::search::{apply_listing, ListingCriteria};
use serde::Serialize;

/// The visible slice of the catalog, with the counts the shop page shows.
#[derive(Debug, Clone, Serialize)]
pub struct Listing {
    /// Products that passed the pipeline, in display order.
    pub items: Vec<Product>,
    /// Size of the full catalog.
    pub total: usize,
}

impl Listing {
    /// Run the pipeline over a catalog.
    pub fn build(catalog: &[Product], criteria: &ListingCriteria) -> Self {
        Self {
            items: apply_listing(catalog, criteria),
            total: catalog.len(),
        }
    }

    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of visible products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// "Showing 3 of 20 products".
    pub fn summary(&self) -> String {
        format!("Showing {} of {} products", self.items.len(), self.total)
    }

    /// Page heading for the criteria that produced this listing.
    pub fn heading(criteria: &ListingCriteria) -> String {
        category_heading(criteria.category.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_summary() {
        let catalog = vec![
            Product::new(1u64, "a", 10.0, "electronics"),
            Product::new(2u64, "b", 20.0, "jewelery"),
            Product::new(3u64, "c", 30.0, "electronics"),
        ];
        let criteria = ListingCriteria::new().with_category("electronics");
        let listing = Listing::build(&catalog, &criteria);

        assert_eq!(listing.len(), 2);
        assert_eq!(listing.summary(), "Showing 2 of 3 products");
        assert_eq!(Listing::heading(&criteria), "Electronics");
        assert_eq!(Listing::heading(&ListingCriteria::new()), "All Products");
    }

    #[test]
    fn test_empty_listing() {
        let listing = Listing::build(&[], &ListingCriteria::new());
        assert!(listing.is_empty());
        assert_eq!(listing.summary(), "Showing 0 of 0 products");
    }
}
