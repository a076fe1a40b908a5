use crate::actions::UiAction;
use crate::dispatcher::Dispatcher;
use crate::state::UiState;
use shopfront_core::AppState;

pub mod command_palette_middleware;
pub mod keyboard_middleware;

pub use command_palette_middleware::CommandPaletteMiddleware;
pub use keyboard_middleware::KeyboardMiddleware;

/// Middleware trait - intercepts front end actions before they are reduced
/// or forwarded to the shopfront store
pub trait Middleware {
    /// Handle an action
    ///
    /// - `action`: The action to process
    /// - `state`: Current shopfront snapshot (read-only)
    /// - `ui`: Current terminal state (read-only)
    /// - `dispatcher`: Use to dispatch actions that should re-enter the chain
    ///
    /// Returns `true` to continue chain, `false` to consume action
    fn handle(
        &mut self,
        action: &UiAction,
        state: &AppState,
        ui: &UiState,
        dispatcher: &Dispatcher,
    ) -> bool;
}
