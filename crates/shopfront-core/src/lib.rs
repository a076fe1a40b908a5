//! Redux-style state container for a storefront
//!
//! The store owns one snapshot of the catalog, cart, session, order history and
//! navigation. Presentation layers read snapshots and dispatch [`Action`]s;
//! [`reducers::apply`] is the pure transition function behind [`Store::dispatch`].
//!
//! ```
//! use shopfront_core::actions::{Action, BootstrapAction, CartAction};
//! use shopfront_core::middleware::{BootstrapMiddleware, LoggingMiddleware};
//! use shopfront_core::{AppState, Store};
//!
//! let mut store = Store::new(AppState::default());
//! store.add_middleware(LoggingMiddleware::new());
//! store.add_middleware(BootstrapMiddleware::default());
//! store.dispatch(Action::Bootstrap(BootstrapAction::Start));
//!
//! let belt = store.state().catalog.get("6").cloned().unwrap();
//! store.dispatch(Action::Cart(CartAction::quick_add(belt)));
//! assert_eq!(store.state().cart.item_count(), 1);
//! ```

pub mod actions;
pub mod dispatcher;
pub mod domain_models;
pub mod middleware;
pub mod reducers;
pub mod seed;
pub mod state;
pub mod store;
pub mod view_models;

pub use actions::Action;
pub use dispatcher::Dispatcher;
pub use reducers::apply;
pub use state::AppState;
pub use store::Store;
