//! Catalog filter model
//!
//! Filtering options for the product grid.

use std::str::FromStr;

use super::{CatalogItem, Category};

/// Filter for narrowing the product grid down to one department
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Show all products
    #[default]
    All,
    /// Show only products of one category
    Only(Category),
}

impl CategoryFilter {
    /// Check if a catalog item passes this filter
    pub fn matches(&self, item: &CatalogItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
        }
    }

    /// Get the display label for this filter
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Products",
            CategoryFilter::Only(category) => category.label(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            Ok(CategoryFilter::All)
        } else {
            Category::from_str(s).map(CategoryFilter::Only)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_filter() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "women".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Women)
        );
        assert!("everything".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_labels() {
        assert_eq!(CategoryFilter::All.label(), "All Products");
        assert_eq!(CategoryFilter::Only(Category::Accessories).label(), "Accessories");
    }
}
