//! Cart actions

use std::sync::Arc;

use crate::domain_models::{CartLineKey, CartLineRef, CatalogItem};

/// Actions that edit the shopping cart
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Merge into the line with the same (item id, size, color), or append one.
    /// A zero quantity is ignored.
    Add {
        item: Arc<CatalogItem>,
        quantity: u32,
        size: String,
        color: String,
    },
    /// Set a line's quantity; zero or below removes the line
    Update { line: CartLineRef, quantity: i64 },
    /// Remove one line
    Remove(CartLineRef),
    /// Empty the cart
    Clear,
}

impl CartAction {
    pub fn add(
        item: Arc<CatalogItem>,
        quantity: u32,
        size: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        CartAction::Add {
            item,
            quantity,
            size: size.into(),
            color: color.into(),
        }
    }

    /// Quick add: one unit in the item's first size and color
    pub fn quick_add(item: Arc<CatalogItem>) -> Self {
        let (size, color) = item.default_selection();
        let (size, color) = (size.to_string(), color.to_string());
        CartAction::add(item, 1, size, color)
    }

    pub fn update_at(index: usize, quantity: i64) -> Self {
        CartAction::Update {
            line: CartLineRef::Index(index),
            quantity,
        }
    }

    pub fn update_key(key: CartLineKey, quantity: i64) -> Self {
        CartAction::Update {
            line: CartLineRef::Key(key),
            quantity,
        }
    }

    pub fn remove_at(index: usize) -> Self {
        CartAction::Remove(CartLineRef::Index(index))
    }

    pub fn remove_key(key: CartLineKey) -> Self {
        CartAction::Remove(CartLineRef::Key(key))
    }
}
