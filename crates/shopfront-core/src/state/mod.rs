//! Application State Module
//!
//! Contains all state types held by the store, organized by feature.

mod app;
mod cart;
mod catalog;
mod navigation;

pub use app::AppState;
pub use cart::Cart;
pub use catalog::Catalog;
pub use navigation::NavigationState;
