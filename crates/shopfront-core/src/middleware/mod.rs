use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::state::AppState;

pub mod bootstrap_middleware;
pub mod logging_middleware;

pub use bootstrap_middleware::BootstrapMiddleware;
pub use logging_middleware::LoggingMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware is where side effects live (reading seed files, logging), so
/// reducers stay pure.
pub trait Middleware: Send {
    /// Inspect `action` against the snapshot it would be applied to
    ///
    /// Follow-up actions go through `dispatcher` and run once this one is done.
    /// Return `false` to stop the action here; it then never reaches the
    /// reducer and no snapshot is published for it.
    fn handle(&mut self, action: &Action, state: &AppState, dispatcher: &Dispatcher) -> bool;
}
