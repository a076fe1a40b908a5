use crate::actions::{Action, CatalogAction, OrderAction};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::AppState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, state: &AppState, _dispatcher: &Dispatcher) -> bool {
        match action {
            // A full catalog dump is too noisy for the log
            Action::Catalog(CatalogAction::Set(items)) => {
                log::debug!("Action: {} ({} items)", action.name(), items.len());
            }
            Action::Orders(OrderAction::Set(orders)) => {
                log::debug!("Action: {} ({} orders)", action.name(), orders.len());
            }
            _ => {
                log::debug!("Action: {:?}", action);
            }
        }
        log::trace!(
            "State before {}: {} cart lines, signed in: {}",
            action.name(),
            state.cart.len(),
            state.is_signed_in()
        );

        true // Always pass action through
    }
}
