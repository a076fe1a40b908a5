//! Bootstrap Middleware
//!
//! Manages the store's startup sequence:
//! - Loads the catalog seed on Bootstrap::Start
//! - Places the sample shop orders against that catalog
//! - Dispatches SetLoading(true), Catalog::Set, Orders::Set, SetLoading(false), Bootstrap::End
//!
//! A seed that fails to load is logged and replaced by the built-in sample catalog.

use crate::actions::{Action, BootstrapAction, CatalogAction, GlobalAction, OrderAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::seed::{sample_catalog, sample_orders, CatalogSeed};
use crate::state::AppState;

/// Bootstrap middleware - seeds the catalog and the shop's order history
pub struct BootstrapMiddleware {
    seed: CatalogSeed,
    bootstrapped: bool,
}

impl BootstrapMiddleware {
    pub fn new(seed: CatalogSeed) -> Self {
        Self {
            seed,
            bootstrapped: false,
        }
    }
}

impl Default for BootstrapMiddleware {
    fn default() -> Self {
        Self::new(CatalogSeed::BuiltIn)
    }
}

impl Middleware for BootstrapMiddleware {
    fn handle(&mut self, action: &Action, _state: &AppState, dispatcher: &Dispatcher) -> bool {
        match action {
            Action::Bootstrap(BootstrapAction::Start) => {
                if self.bootstrapped {
                    log::debug!("BootstrapMiddleware: already bootstrapped, ignoring");
                    return false;
                }
                log::info!("BootstrapMiddleware: Bootstrap starting ({:?})", self.seed);
                dispatcher.dispatch(Action::Global(GlobalAction::SetLoading(true)));

                let items = match self.seed.load() {
                    Ok(items) => items,
                    Err(e) => {
                        log::warn!("BootstrapMiddleware: {}; using sample catalog", e);
                        sample_catalog()
                    }
                };
                let orders = sample_orders(&items);
                log::info!(
                    "BootstrapMiddleware: seeding {} catalog items, {} orders",
                    items.len(),
                    orders.len()
                );

                dispatcher.dispatch(Action::Catalog(CatalogAction::Set(items)));
                dispatcher.dispatch(Action::Orders(OrderAction::Set(orders)));
                dispatcher.dispatch(Action::Global(GlobalAction::SetLoading(false)));
                dispatcher.dispatch(Action::Bootstrap(BootstrapAction::End));
                self.bootstrapped = true;
                false
            }

            Action::Bootstrap(BootstrapAction::End) => {
                log::info!("BootstrapMiddleware: Bootstrap ended");
                false
            }

            _ => true,
        }
    }
}
