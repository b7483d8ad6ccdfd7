//! Listing filters.

use crate::catalog::{is_all_categories, Product};
use crate::error::CommerceError;
use crate::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category equality filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// Exactly this category label.
    Only(String),
}

impl CategoryFilter {
    /// Build from a selected label; `""` and `"all"` select everything.
    pub fn from_label(label: &str) -> Self {
        if is_all_categories(label) {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(label.to_string())
        }
    }

    /// The selected label, if any.
    pub fn label(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Only(label) => Some(label),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(label) => product.category == *label,
        }
    }
}

/// A fixed price bucket.
///
/// Bounds are inclusive and compared against the published dollar price,
/// so `100-199` accepts 100.00 through 199.99 and nothing in between
/// 199.99 and 200.00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriceRange {
    Under100,
    From100To199,
    From200To299,
    From300To399,
    From400,
}

impl PriceRange {
    /// All buckets, in display order.
    pub const ALL: [PriceRange; 5] = [
        PriceRange::Under100,
        PriceRange::From100To199,
        PriceRange::From200To299,
        PriceRange::From300To399,
        PriceRange::From400,
    ];

    /// Stable key (e.g., "100-199").
    pub fn key(&self) -> &'static str {
        match self {
            PriceRange::Under100 => "0-99",
            PriceRange::From100To199 => "100-199",
            PriceRange::From200To299 => "200-299",
            PriceRange::From300To399 => "300-399",
            PriceRange::From400 => "400+",
        }
    }

    /// Inclusive bounds in cents; `None` for an open upper bound.
    pub fn bounds(&self) -> (i64, Option<i64>) {
        match self {
            PriceRange::Under100 => (0, Some(9_999)),
            PriceRange::From100To199 => (10_000, Some(19_999)),
            PriceRange::From200To299 => (20_000, Some(29_999)),
            PriceRange::From300To399 => (30_000, Some(39_999)),
            PriceRange::From400 => (40_000, None),
        }
    }

    /// Display label (e.g., "$100.00 - $199.99").
    pub fn label(&self) -> String {
        let (min, max) = self.bounds();
        match max {
            Some(max) => format!("{} - {}", Money::usd(min), Money::usd(max)),
            None => format!("{}+", Money::usd(min)),
        }
    }

    /// Check a dollar price against the bucket, without rounding it first.
    pub fn contains(&self, price: f64) -> bool {
        let (min, max) = self.bounds();
        price >= dollars(min) && max.map_or(true, |max| price <= dollars(max))
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.contains(product.price)
    }

    /// Parse an optional bucket key; the empty key means no price filter.
    pub fn parse_optional(key: &str) -> Result<Option<Self>, CommerceError> {
        if key.trim().is_empty() {
            Ok(None)
        } else {
            key.parse().map(Some)
        }
    }
}

fn dollars(cents: i64) -> f64 {
    cents as f64 / 100.0
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl FromStr for PriceRange {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.key() == s.trim())
            .ok_or_else(|| CommerceError::UnknownPriceRange(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn priced(price: f64) -> Product {
        Product::new(1u64, "p", price, "electronics")
    }

    #[test]
    fn test_bucket_edges() {
        let r = PriceRange::From100To199;
        assert!(!r.matches(&priced(99.99)));
        assert!(r.matches(&priced(100.0)));
        assert!(r.matches(&priced(199.99)));
        assert!(!r.matches(&priced(199.999)));
        assert!(!r.matches(&priced(200.0)));
    }

    #[test]
    fn test_sub_cent_prices_at_edges() {
        let edges = [
            (PriceRange::Under100, 0.0, 99.99),
            (PriceRange::From100To199, 100.0, 199.99),
            (PriceRange::From200To299, 200.0, 299.99),
            (PriceRange::From300To399, 300.0, 399.99),
        ];
        for (range, min, max) in edges {
            assert!(range.matches(&priced(min)), "{} rejected {}", range.key(), min);
            assert!(range.matches(&priced(max)), "{} rejected {}", range.key(), max);
            assert!(!range.matches(&priced(min - 0.004)), "{} admitted {}", range.key(), min - 0.004);
            assert!(!range.matches(&priced(max + 0.004)), "{} admitted {}", range.key(), max + 0.004);
        }
        assert!(PriceRange::From400.matches(&priced(400.0)));
        assert!(!PriceRange::From400.matches(&priced(399.996)));
    }

    #[test]
    fn test_price_between_buckets_matches_none() {
        for price in [99.996, 199.994, 299.995, 399.996] {
            let p = priced(price);
            assert!(PriceRange::ALL.iter().all(|r| !r.matches(&p)), "{} matched", price);
        }
    }

    #[test]
    fn test_open_bucket() {
        assert!(PriceRange::From400.matches(&priced(400.0)));
        assert!(PriceRange::From400.matches(&priced(999.99)));
        assert!(!PriceRange::From400.matches(&priced(399.99)));
    }

    #[test]
    fn test_negative_price_in_no_bucket() {
        let p = priced(-1.0);
        assert!(PriceRange::ALL.iter().all(|r| !r.matches(&p)));
    }

    #[test]
    fn test_labels() {
        assert_eq!(PriceRange::Under100.label(), "$0.00 - $99.99");
        assert_eq!(PriceRange::From300To399.label(), "$300.00 - $399.99");
        assert_eq!(PriceRange::From400.label(), "$400.00+");
    }

    #[test]
    fn test_parse() {
        assert_eq!("200-299".parse::<PriceRange>().unwrap(), PriceRange::From200To299);
        assert_eq!(PriceRange::parse_optional("").unwrap(), None);
        assert!(matches!(
            "50-60".parse::<PriceRange>(),
            Err(CommerceError::UnknownPriceRange(_))
        ));
    }

    #[test]
    fn test_category_filter() {
        assert_eq!(CategoryFilter::from_label("all"), CategoryFilter::All);
        let f = CategoryFilter::from_label("jewelery");
        assert_eq!(f.label(), Some("jewelery"));
        assert!(!f.matches(&priced(1.0)));
        assert!(CategoryFilter::All.matches(&priced(1.0)));
    }
}
