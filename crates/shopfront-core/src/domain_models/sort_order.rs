//! Catalog sort order

use std::sync::Arc;

use strum::{Display, EnumIter, EnumString};

use super::CatalogItem;

/// Sort options offered by the product grid
///
/// Every ordering is stable: items that compare equal keep their catalog order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumString, EnumIter)]
#[strum(ascii_case_insensitive)]
pub enum SortOrder {
    /// Featured items first, each group in catalog order
    #[default]
    #[strum(serialize = "featured")]
    Featured,
    #[strum(serialize = "price-low")]
    PriceLowToHigh,
    #[strum(serialize = "price-high")]
    PriceHighToLow,
    /// Highest rated first
    #[strum(serialize = "rating")]
    Rating,
}

impl SortOrder {
    /// Get the display label for this sort order
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Featured => "Featured",
            SortOrder::PriceLowToHigh => "Price: Low to High",
            SortOrder::PriceHighToLow => "Price: High to Low",
            SortOrder::Rating => "Highest Rated",
        }
    }

    /// Sort items in place
    pub fn sort(&self, items: &mut [Arc<CatalogItem>]) {
        match self {
            SortOrder::Featured => items.sort_by_key(|item| !item.featured),
            SortOrder::PriceLowToHigh => items.sort_by(|a, b| a.price.cmp(&b.price)),
            SortOrder::PriceHighToLow => items.sort_by(|a, b| b.price.cmp(&a.price)),
            SortOrder::Rating => items.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        }
    }
}
