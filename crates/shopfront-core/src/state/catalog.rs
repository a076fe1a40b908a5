//! Catalog State
//!
//! The item list is shared behind an `Arc`, so cloning a snapshot never copies
//! products and cart lines can hold on to the exact item they were added from.

use std::sync::Arc;

use crate::domain_models::CatalogItem;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Arc<Vec<Arc<CatalogItem>>>,
}

impl Catalog {
    pub fn new(items: Vec<CatalogItem>) -> Self {
        Self {
            items: Arc::new(items.into_iter().map(Arc::new).collect()),
        }
    }

    pub fn items(&self) -> &[Arc<CatalogItem>] {
        &self.items
    }

    /// Look up an item by id
    pub fn get(&self, id: &str) -> Option<&Arc<CatalogItem>> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::sample_catalog;

    #[test]
    fn test_lookup() {
        let catalog = Catalog::new(sample_catalog());
        assert_eq!(catalog.len(), 6);
        assert_eq!(catalog.get("4").unwrap().name, "Running Sneakers");
        assert!(catalog.get("42").is_none());
    }

    #[test]
    fn test_clone_shares_items() {
        let catalog = Catalog::new(sample_catalog());
        let copy = catalog.clone();
        assert!(Arc::ptr_eq(&catalog.items()[0], &copy.items()[0]));
    }
}
