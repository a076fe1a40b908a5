//! Application configuration
//!
//! Configuration loaded from `.shopfront-lander.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration loaded from `.shopfront-lander.toml`
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Name shown in the header of the storefront
    #[serde(default = "default_store_name")]
    pub store_name: String,

    /// Symbol printed in front of every price
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Products with fewer units in stock than this count as low stock
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,

    /// Initial catalog sort order (featured, price-low, price-high, rating)
    #[serde(default = "default_sort")]
    pub default_sort: String,

    /// JSON file to seed the catalog from instead of the built-in sample data
    #[serde(default)]
    pub catalog_file: Option<PathBuf>,
}

fn default_store_name() -> String {
    "StyleHub".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_low_stock_threshold() -> u32 {
    10
}

fn default_sort() -> String {
    "featured".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            store_name: default_store_name(),
            currency_symbol: default_currency_symbol(),
            low_stock_threshold: default_low_stock_threshold(),
            default_sort: default_sort(),
            catalog_file: None,
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(content) = crate::load_config_file() {
            match Self::from_toml(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from file");
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {:#}", e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Parse config from TOML text, filling missing fields with defaults
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid shopfront-lander config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.store_name, "StyleHub");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.low_stock_threshold, 10);
        assert_eq!(config.default_sort, "featured");
        assert!(config.catalog_file.is_none());
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            store_name = "Corner Shop"
            currency_symbol = "€"
            low_stock_threshold = 3
            default_sort = "rating"
            catalog_file = "catalog.json"
        "#;
        let config = AppConfig::from_toml(toml).unwrap();
        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.low_stock_threshold, 3);
        assert_eq!(config.default_sort, "rating");
        assert_eq!(config.catalog_file, Some(PathBuf::from("catalog.json")));
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config = AppConfig::from_toml("low_stock_threshold = 40").unwrap();
        assert_eq!(config.low_stock_threshold, 40);
        // Other fields should use defaults
        assert_eq!(config.store_name, "StyleHub");
        assert_eq!(config.default_sort, "featured");
    }

    #[test]
    fn test_config_rejects_wrong_types() {
        assert!(AppConfig::from_toml("low_stock_threshold = \"many\"").is_err());
    }
}
