//! Catalog View Model
//!
//! The filtered and sorted product grid.

use std::sync::Arc;

use crate::domain_models::{CatalogItem, CategoryFilter, SortOrder};
use crate::state::AppState;

#[derive(Debug, Clone)]
pub struct CatalogViewModel {
    pub filter: CategoryFilter,
    pub sort: SortOrder,
    /// Items to show, in display order
    pub items: Vec<Arc<CatalogItem>>,
    /// Size of the whole catalog
    pub total: usize,
}

impl CatalogViewModel {
    pub fn from_state(state: &AppState, filter: CategoryFilter, sort: SortOrder) -> Self {
        let mut items: Vec<Arc<CatalogItem>> = state
            .catalog
            .items()
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect();
        sort.sort(&mut items);

        Self {
            filter,
            sort,
            items,
            total: state.catalog.len(),
        }
    }

    /// e.g. "Showing 2 of 6 products"
    pub fn summary(&self) -> String {
        format!("Showing {} of {} products", self.items.len(), self.total)
    }
}
