//! Profile View Model

use crate::domain_models::{Address, Order};
use crate::state::AppState;

/// What the profile page shows for the signed-in user
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileViewModel {
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub addresses: Vec<Address>,
    /// Where new orders ship unless the user picks another address
    pub default_address: Option<Address>,
    /// Orders placed by this user, newest first
    pub orders: Vec<Order>,
}

impl ProfileViewModel {
    /// `None` when nobody is signed in
    pub fn from_state(state: &AppState) -> Option<Self> {
        let session = state.session.as_ref()?;

        let mut orders: Vec<Order> = state
            .orders
            .iter()
            .filter(|order| order.user_id == session.id)
            .cloned()
            .collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Some(Self {
            name: session.name.clone(),
            email: session.email.clone(),
            is_admin: session.is_admin,
            addresses: session.addresses.clone(),
            default_address: session.default_address().cloned(),
            orders,
        })
    }
}
