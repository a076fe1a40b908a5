//! Catalog item model
//!
//! One purchasable product. Field names serialize in camelCase so catalog
//! seed files share their shape with the sample data.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Category;

/// A product in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique within a loaded catalog
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Decimal,
    /// Pre-discount reference price, not validated to exceed `price`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Decimal>,
    /// Primary image URI
    pub image: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub category: Category,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default)]
    pub sizes: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub in_stock: bool,
    pub stock_quantity: u32,
    /// Only used to order the featured sort
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub rating: f32,
    #[serde(default)]
    pub reviews: u32,
}

impl CatalogItem {
    /// Amount saved against the original price
    ///
    /// `None` when there is no original price or it is not above the price.
    pub fn savings(&self) -> Option<Decimal> {
        self.original_price
            .filter(|original| *original > self.price)
            .map(|original| original - self.price)
    }

    /// Discount as a whole percentage of the original price
    pub fn discount_percent(&self) -> Option<u32> {
        let original = self.original_price?;
        let savings = self.savings()?;
        let percent = (savings * Decimal::ONE_HUNDRED / original).round();
        u32::try_from(percent).ok()
    }

    /// Size and color picked by a quick "add to cart" without a selection
    ///
    /// Falls back to empty strings when the item lists no options.
    pub fn default_selection(&self) -> (&str, &str) {
        (
            self.sizes.first().map(String::as_str).unwrap_or_default(),
            self.colors.first().map(String::as_str).unwrap_or_default(),
        )
    }

    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    pub fn has_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }
}

impl AsRef<CatalogItem> for CatalogItem {
    fn as_ref(&self) -> &CatalogItem {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_catalog;
    use rust_decimal_macros::dec;

    fn tshirt() -> CatalogItem {
        sample_catalog().remove(0)
    }

    #[test]
    fn test_savings() {
        let item = tshirt();
        assert_eq!(item.savings(), Some(dec!(10.00)));
        assert_eq!(item.discount_percent(), Some(25));
    }

    #[test]
    fn test_no_savings_without_higher_original_price() {
        let mut item = tshirt();
        item.original_price = None;
        assert_eq!(item.savings(), None);

        item.original_price = Some(dec!(10.00));
        assert_eq!(item.savings(), None);
        assert_eq!(item.discount_percent(), None);
    }

    #[test]
    fn test_default_selection() {
        let mut item = tshirt();
        assert_eq!(item.default_selection(), ("S", "Black"));

        item.sizes.clear();
        item.colors.clear();
        assert_eq!(item.default_selection(), ("", ""));
    }

    #[test]
    fn test_option_lookup() {
        let item = tshirt();
        assert!(item.has_size("XL"));
        assert!(!item.has_size("XXL"));
        assert!(item.has_color("Navy"));
    }

    #[test]
    fn test_deserialize_camel_case() {
        let json = r#"{
            "id": "9",
            "name": "Scarf",
            "description": "Warm",
            "price": "15.50",
            "image": "scarf.jpg",
            "category": "accessories",
            "inStock": false,
            "stockQuantity": 0
        }"#;
        let item: CatalogItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.price, dec!(15.50));
        assert_eq!(item.category, Category::Accessories);
        assert!(!item.in_stock);
        assert!(item.sizes.is_empty());
        assert_eq!(item.original_price, None);
    }
}
