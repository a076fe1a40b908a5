//! Cart State
//!
//! Lines are only changed through the cart reducer, which keeps the
//! invariants: one line per (item id, size, color) and quantity >= 1.

use rust_decimal::Decimal;

use crate::domain_models::{CartLine, CartLineKey, CartLineRef};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Find the line with the given natural key
    pub fn find(&self, key: &CartLineKey) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.matches_key(key))
    }

    /// Resolve a line reference to a position, `None` if it points nowhere
    pub fn position(&self, line: &CartLineRef) -> Option<usize> {
        match line {
            CartLineRef::Index(index) => (*index < self.lines.len()).then_some(*index),
            CartLineRef::Key(key) => self.lines.iter().position(|l| l.matches_key(key)),
        }
    }

    /// Sum of quantities over all lines
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub(crate) fn lines_mut(&mut self) -> &mut Vec<CartLine> {
        &mut self.lines
    }
}
