//! Catalog actions

use crate::domain_models::CatalogItem;

#[derive(Debug, Clone)]
pub enum CatalogAction {
    /// Replace the catalog wholesale (used once, at bootstrap)
    Set(Vec<CatalogItem>),
}
