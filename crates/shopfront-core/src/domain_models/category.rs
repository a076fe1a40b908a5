//! Product category model

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Fixed set of catalog departments
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Category {
    Men,
    Women,
    Kids,
    Shoes,
    Accessories,
}

impl Category {
    /// Get the display label for this category
    pub fn label(&self) -> &'static str {
        match self {
            Category::Men => "Men",
            Category::Women => "Women",
            Category::Kids => "Kids",
            Category::Shoes => "Shoes",
            Category::Accessories => "Accessories",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Category::from_str("shoes").unwrap(), Category::Shoes);
        assert_eq!(Category::from_str("Kids").unwrap(), Category::Kids);
        assert!(Category::from_str("hats").is_err());
    }

    #[test]
    fn test_display_matches_serde_name() {
        for category in Category::iter() {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category));
        }
    }
}
