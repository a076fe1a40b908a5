//! Dispatcher for front end middleware
//!
//! Same contract as the shopfront dispatcher: queued actions re-enter the
//! front end middleware chain from the top once the current action is done.

use crate::actions::UiAction;
use std::sync::mpsc::Sender;

#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<UiAction>,
}

impl Dispatcher {
    pub fn new(action_tx: Sender<UiAction>) -> Self {
        Self { action_tx }
    }

    pub fn dispatch(&self, action: UiAction) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: app dropped, lost {}", e.0.name());
        }
    }
}
