//! Cart View Model
//!
//! Pre-computes the cart sidebar and the header badge.

use rust_decimal::Decimal;

use crate::domain_models::CartLineKey;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq)]
pub struct CartLineViewModel {
    /// 1-based position shown to the user
    pub position: usize,
    pub key: CartLineKey,
    pub name: String,
    pub size: String,
    pub color: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub line_total: Decimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartViewModel {
    pub lines: Vec<CartLineViewModel>,
    /// Units across all lines; the header badge
    pub item_count: u32,
    pub subtotal: Decimal,
}

impl CartViewModel {
    pub fn from_state(state: &AppState) -> Self {
        let lines = state
            .cart
            .lines()
            .iter()
            .enumerate()
            .map(|(index, line)| CartLineViewModel {
                position: index + 1,
                key: line.key(),
                name: line.item.name.clone(),
                size: line.size.clone(),
                color: line.color.clone(),
                quantity: line.quantity,
                unit_price: line.item.price,
                line_total: line.line_total(),
            })
            .collect();

        Self {
            lines,
            item_count: state.cart.item_count(),
            subtotal: state.cart.subtotal(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
