//! Domain models
//!
//! Core domain types used throughout the store.
//! These are pure domain concepts, separate from the state container.

pub mod cart_line;
pub mod catalog_filter;
pub mod catalog_item;
pub mod category;
pub mod navigation;
pub mod order;
pub mod session;
pub mod sort_order;

pub use cart_line::{CartLine, CartLineKey, CartLineRef};
pub use catalog_filter::CategoryFilter;
pub use catalog_item::CatalogItem;
pub use category::Category;
pub use navigation::{Page, TopLevelView};
pub use order::{Order, OrderStatus};
pub use session::{Address, Session};
pub use sort_order::SortOrder;
