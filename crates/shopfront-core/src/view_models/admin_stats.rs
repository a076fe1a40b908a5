//! Admin dashboard statistics

use rust_decimal::Decimal;

use crate::domain_models::OrderStatus;
use crate::state::AppState;

/// Headline numbers for the admin dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminStats {
    pub total_orders: usize,
    /// Sum of totals of all orders that were not cancelled
    pub total_revenue: Decimal,
    pub pending_orders: usize,
    /// Pending, confirmed or processing
    pub open_orders: usize,
    pub total_products: usize,
    /// Out of stock, or fewer units than the threshold
    pub low_stock_products: usize,
}

impl AdminStats {
    pub fn from_state(state: &AppState, low_stock_threshold: u32) -> Self {
        let orders = &state.orders;
        Self {
            total_orders: orders.len(),
            total_revenue: orders
                .iter()
                .filter(|order| order.status != OrderStatus::Cancelled)
                .map(|order| order.total)
                .sum(),
            pending_orders: orders
                .iter()
                .filter(|order| order.status == OrderStatus::Pending)
                .count(),
            open_orders: orders.iter().filter(|order| order.status.is_open()).count(),
            total_products: state.catalog.len(),
            low_stock_products: state
                .catalog
                .items()
                .iter()
                .filter(|item| !item.in_stock || item.stock_quantity < low_stock_threshold)
                .count(),
        }
    }
}
