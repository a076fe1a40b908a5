//! Application State

use crate::domain_models::{Order, Session};

use super::{Cart, Catalog, NavigationState};

/// One snapshot of everything the store owns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub catalog: Catalog,
    pub cart: Cart,
    /// Present only while someone is signed in
    pub session: Option<Session>,
    pub orders: Vec<Order>,
    /// Advisory; nothing in the core waits on it
    pub loading: bool,
    pub navigation: NavigationState,
}

impl AppState {
    pub fn is_signed_in(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(|session| session.is_admin)
    }
}
