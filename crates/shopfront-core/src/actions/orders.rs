//! Order history actions

use crate::domain_models::Order;

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Replace the order history wholesale
    Set(Vec<Order>),
}
