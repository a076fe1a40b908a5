//! View Models
//!
//! Pre-computed presentation data derived from a snapshot. They are rebuilt on
//! every render and never stored back into the state.

pub mod admin_stats;
pub mod admin_view_model;
pub mod cart_view_model;
pub mod catalog_view_model;
pub mod profile_view_model;

pub use admin_stats::AdminStats;
pub use admin_view_model::{AdminViewModel, OrderRow, StockRow};
pub use cart_view_model::{CartLineViewModel, CartViewModel};
pub use catalog_view_model::CatalogViewModel;
pub use profile_view_model::ProfileViewModel;
