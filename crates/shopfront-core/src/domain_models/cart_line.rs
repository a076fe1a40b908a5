//! Cart line model

use std::fmt;
use std::sync::Arc;

use rust_decimal::Decimal;

use super::CatalogItem;

/// Natural key of a cart line: no two lines in a cart share one
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CartLineKey {
    pub item_id: String,
    pub size: String,
    pub color: String,
}

impl CartLineKey {
    pub fn new(item_id: impl Into<String>, size: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            size: size.into(),
            color: color.into(),
        }
    }
}

impl fmt::Display for CartLineKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.item_id, self.size, self.color)
    }
}

/// Address of a cart line inside an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartLineRef {
    /// Position in the cart the caller rendered; only valid against that snapshot
    Index(usize),
    /// Stable natural key, immune to concurrent removals
    Key(CartLineKey),
}

/// One row of the shopping cart
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    pub item: Arc<CatalogItem>,
    /// Always at least 1
    pub quantity: u32,
    pub size: String,
    pub color: String,
}

impl CartLine {
    pub fn key(&self) -> CartLineKey {
        CartLineKey::new(&self.item.id, &self.size, &self.color)
    }

    /// Check whether this line is the one identified by the triple
    pub fn matches(&self, item_id: &str, size: &str, color: &str) -> bool {
        self.item.id == item_id && self.size == size && self.color == color
    }

    pub fn matches_key(&self, key: &CartLineKey) -> bool {
        self.matches(&key.item_id, &key.size, &key.color)
    }

    /// Unit price times quantity
    pub fn line_total(&self) -> Decimal {
        self.item.price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_catalog;
    use rust_decimal_macros::dec;

    fn line() -> CartLine {
        CartLine {
            item: Arc::new(sample_catalog().remove(1)),
            quantity: 3,
            size: "M".to_string(),
            color: "Blue".to_string(),
        }
    }

    #[test]
    fn test_key_and_match() {
        let line = line();
        assert_eq!(line.key(), CartLineKey::new("2", "M", "Blue"));
        assert!(line.matches("2", "M", "Blue"));
        assert!(!line.matches("2", "L", "Blue"));
        assert!(line.matches_key(&CartLineKey::new("2", "M", "Blue")));
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line().line_total(), dec!(269.97));
    }

    #[test]
    fn test_key_display() {
        assert_eq!(CartLineKey::new("4", "10", "White").to_string(), "4 (10, White)");
    }
}
