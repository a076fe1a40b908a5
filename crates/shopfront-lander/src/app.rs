//! Front end store
//!
//! Wraps the shopfront [`Store`] with the terminal's own Redux loop: front end
//! middleware sees every [`UiAction`] first, [`UiAction::Store`] is forwarded
//! to the shopfront store, and everything else goes through the UI reducer.

use std::sync::mpsc::{self, Receiver};

use shopfront_config::AppConfig;
use shopfront_core::domain_models::SortOrder;
use shopfront_core::{AppState, Store};

use crate::actions::UiAction;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducer;
use crate::state::UiState;
use crate::theme::Theme;
use crate::views::Screen;

pub struct App {
    store: Store,
    ui: UiState,
    config: AppConfig,
    theme: Theme,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    pending: Receiver<UiAction>,
}

impl App {
    pub fn new(store: Store, config: AppConfig, default_sort: SortOrder) -> Self {
        let (action_tx, pending) = mpsc::channel();
        Self {
            store,
            ui: UiState::new(default_sort),
            config,
            theme: Theme::default(),
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            pending,
        }
    }

    /// Add front end middleware
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware<M: Middleware + 'static>(&mut self, middleware: M) {
        self.middleware.push(Box::new(middleware));
    }

    /// Current shopfront snapshot
    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    /// Everything the next frame is drawn from
    pub fn screen(&self) -> Screen<'_> {
        Screen {
            state: self.store.state(),
            ui: &self.ui,
            config: &self.config,
            theme: &self.theme,
        }
    }

    /// Process an action, then everything it caused middleware to dispatch
    pub fn dispatch(&mut self, action: UiAction) {
        self.process(action);

        while let Ok(action) = self.pending.try_recv() {
            self.process(action);
        }
    }

    fn process(&mut self, action: UiAction) {
        // Pass through middleware chain
        for middleware in &mut self.middleware {
            if !middleware.handle(&action, self.store.state(), &self.ui, &self.dispatcher) {
                return;
            }
        }

        match action {
            UiAction::Store(action) => self.store.dispatch(action),
            action => {
                log::trace!("App: reducing {}", action.name());
                self.ui = reducer::reduce(self.ui.clone(), &action, self.store.state());
            }
        }
    }
}
