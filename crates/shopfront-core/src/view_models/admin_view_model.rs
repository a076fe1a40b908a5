//! Admin View Model
//!
//! Everything the admin dashboard tabs show: headline stats, the stock table
//! and the order list.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::AdminStats;
use crate::domain_models::{Category, OrderStatus};
use crate::state::AppState;

/// One product row of the stock table
#[derive(Debug, Clone, PartialEq)]
pub struct StockRow {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub price: Decimal,
    pub stock_quantity: u32,
    pub in_stock: bool,
    /// Out of stock, or fewer units than the threshold
    pub low_stock: bool,
}

/// One order row of the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    pub id: String,
    pub customer: String,
    pub item_count: u32,
    pub total: Decimal,
    pub status: OrderStatus,
    pub placed_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminViewModel {
    pub stats: AdminStats,
    /// Catalog order
    pub products: Vec<StockRow>,
    /// Newest first
    pub orders: Vec<OrderRow>,
}

impl AdminViewModel {
    pub fn from_state(state: &AppState, low_stock_threshold: u32) -> Self {
        let products = state
            .catalog
            .items()
            .iter()
            .map(|item| StockRow {
                id: item.id.clone(),
                name: item.name.clone(),
                category: item.category,
                price: item.price,
                stock_quantity: item.stock_quantity,
                in_stock: item.in_stock,
                low_stock: !item.in_stock || item.stock_quantity < low_stock_threshold,
            })
            .collect();

        let mut orders: Vec<&_> = state.orders.iter().collect();
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        let orders = orders
            .into_iter()
            .map(|order| OrderRow {
                id: order.id.clone(),
                customer: order.customer_name.clone(),
                item_count: order.item_count(),
                total: order.total,
                status: order.status,
                placed_on: order.created_at.date_naive(),
            })
            .collect();

        Self {
            stats: AdminStats::from_state(state, low_stock_threshold),
            products,
            orders,
        }
    }

    /// Products that need restocking
    pub fn low_stock(&self) -> impl Iterator<Item = &StockRow> {
        self.products.iter().filter(|row| row.low_stock)
    }

    /// The newest `limit` orders
    pub fn recent_orders(&self, limit: usize) -> &[OrderRow] {
        &self.orders[..limit.min(self.orders.len())]
    }
}
