use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::reduce;
use crate::state::AppState;

/// Store - holds the current snapshot and runs the Redux loop
///
/// - Actions pass through the middleware chain, then the reducer
/// - Each reduced action publishes a new `Arc<AppState>`; earlier snapshots
///   handed out by [`Store::snapshot`] are never modified
/// - Actions queued by middleware run after the current one, in order
///
/// Everything happens synchronously on the caller's thread.
pub struct Store {
    state: Arc<AppState>,
    revision: u64,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    pending: Receiver<Action>,
}

impl Store {
    pub fn new(initial_state: AppState) -> Self {
        let (action_tx, pending) = mpsc::channel();
        Self {
            state: Arc::new(initial_state),
            revision: 0,
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            pending,
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware<M: Middleware + 'static>(&mut self, middleware: M) {
        self.middleware.push(Box::new(middleware));
    }

    /// Get the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Get a shared handle to the current snapshot
    ///
    /// Compare handles with `Arc::ptr_eq` to detect change.
    pub fn snapshot(&self) -> Arc<AppState> {
        Arc::clone(&self.state)
    }

    /// Number of snapshots published since construction
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Process an action, then everything it caused middleware to dispatch
    pub fn dispatch(&mut self, action: Action) {
        self.process(action);

        while let Ok(action) = self.pending.try_recv() {
            self.process(action);
        }
    }

    fn process(&mut self, action: Action) {
        if matches!(action, Action::None) {
            return;
        }

        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                return;
            }
        }

        let next = reduce(AppState::clone(&self.state), &action);
        self.state = Arc::new(next);
        self.revision += 1;
    }
}
