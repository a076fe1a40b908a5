//! Follow-up actions from middleware
//!
//! Middleware cannot call back into the store while the store is running it,
//! so it queues actions here instead. The store drains the queue in FIFO order
//! once the current action is finished, and each queued action starts again at
//! the top of the middleware chain. Bootstrap::Start, for example, queues
//! SetLoading, Catalog::Set and Bootstrap::End this way.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Handle for queueing actions on a [`Store`](crate::Store)
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue `action`; dropped with an error log if the store is gone
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: store dropped, lost {}", e.0.name());
        }
    }
}
