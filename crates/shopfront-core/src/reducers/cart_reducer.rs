use crate::actions::CartAction;
use crate::domain_models::CartLine;
use crate::state::Cart;

/// Reducer for the shopping cart
///
/// Never fails: references to missing lines and zero-quantity adds are no-ops.
pub fn reduce(mut cart: Cart, action: &CartAction) -> Cart {
    match action {
        CartAction::Add {
            item,
            quantity,
            size,
            color,
        } => {
            if *quantity == 0 {
                log::debug!("Ignoring add of zero units of {}", item.id);
                return cart;
            }

            let lines = cart.lines_mut();
            match lines.iter_mut().find(|line| line.matches(&item.id, size, color)) {
                Some(line) => {
                    line.quantity = line.quantity.saturating_add(*quantity);
                    log::debug!("Merged into {}: quantity {}", line.key(), line.quantity);
                }
                None => {
                    lines.push(CartLine {
                        item: item.clone(),
                        quantity: *quantity,
                        size: size.clone(),
                        color: color.clone(),
                    });
                    log::debug!("Added new cart line for {} x{}", item.id, quantity);
                }
            }
        }

        CartAction::Update { line, quantity } => match cart.position(line) {
            Some(index) if *quantity <= 0 => {
                let removed = cart.lines_mut().remove(index);
                log::debug!("Quantity {} removes {}", quantity, removed.key());
            }
            Some(index) => {
                let quantity = u32::try_from(*quantity).unwrap_or(u32::MAX);
                if let Some(target) = cart.lines_mut().get_mut(index) {
                    target.quantity = quantity;
                }
            }
            None => {
                log::debug!("Update of missing cart line {:?} ignored", line);
            }
        },

        CartAction::Remove(line) => match cart.position(line) {
            Some(index) => {
                let removed = cart.lines_mut().remove(index);
                log::debug!("Removed {}", removed.key());
            }
            None => {
                log::debug!("Removal of missing cart line {:?} ignored", line);
            }
        },

        CartAction::Clear => {
            cart.lines_mut().clear();
        }
    }

    cart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::{CartLineKey, CatalogItem};
    use crate::seed::sample_catalog;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;
    use std::sync::Arc;

    fn items() -> Vec<Arc<CatalogItem>> {
        sample_catalog().into_iter().map(Arc::new).collect()
    }

    fn apply_all(cart: Cart, actions: &[CartAction]) -> Cart {
        actions.iter().fold(cart, |cart, action| reduce(cart, action))
    }

    fn summary(cart: &Cart) -> Vec<(String, String, String, u32)> {
        cart.lines()
            .iter()
            .map(|l| (l.item.id.clone(), l.size.clone(), l.color.clone(), l.quantity))
            .collect()
    }

    /// Cart with three distinct lines: X = (1, M, Black), Y = (2, L, Blue), Z = (4, 10, White)
    fn xyz() -> Cart {
        let items = items();
        apply_all(
            Cart::default(),
            &[
                CartAction::add(items[0].clone(), 1, "M", "Black"),
                CartAction::add(items[1].clone(), 2, "L", "Blue"),
                CartAction::add(items[3].clone(), 1, "10", "White"),
            ],
        )
    }

    #[test]
    fn test_repeat_add_merges() {
        let items = items();
        let cart = apply_all(
            Cart::default(),
            &[
                CartAction::add(items[0].clone(), 1, "M", "Black"),
                CartAction::add(items[0].clone(), 2, "M", "Black"),
            ],
        );
        assert_eq!(
            summary(&cart),
            vec![("1".to_string(), "M".to_string(), "Black".to_string(), 3)]
        );
    }

    #[test]
    fn test_merge_invariant_over_mixed_adds() {
        let items = items();
        let adds = vec![
            (0, 1, "M", "Black"),
            (0, 1, "L", "Black"),
            (2, 4, "S", "Pink"),
            (0, 3, "M", "Black"),
            (0, 2, "M", "White"),
            (2, 1, "S", "Pink"),
            (0, 5, "L", "Black"),
        ];
        let actions: Vec<CartAction> = adds
            .iter()
            .map(|(i, q, s, c)| CartAction::add(items[*i].clone(), *q, *s, *c))
            .collect();
        let cart = apply_all(Cart::default(), &actions);

        let mut expected: HashMap<CartLineKey, u32> = HashMap::new();
        for (i, q, s, c) in &adds {
            *expected
                .entry(CartLineKey::new(&items[*i].id, *s, *c))
                .or_default() += q;
        }

        assert_eq!(cart.len(), expected.len());
        for (key, quantity) in expected {
            assert_eq!(cart.find(&key).map(|l| l.quantity), Some(quantity));
        }
        // First-seen order is kept
        assert_eq!(cart.lines()[0].key(), CartLineKey::new("1", "M", "Black"));
        assert_eq!(cart.lines()[1].key(), CartLineKey::new("1", "L", "Black"));
    }

    #[test]
    fn test_add_accepts_empty_selection() {
        let items = items();
        let cart = reduce(Cart::default(), &CartAction::add(items[5].clone(), 1, "", ""));
        assert_eq!(cart.lines()[0].size, "");
        assert_eq!(cart.lines()[0].color, "");
    }

    #[test]
    fn test_add_zero_is_ignored() {
        let items = items();
        let cart = reduce(Cart::default(), &CartAction::add(items[0].clone(), 0, "M", "Black"));
        assert!(cart.is_empty());

        let cart = reduce(xyz(), &CartAction::add(items[0].clone(), 0, "M", "Black"));
        assert_eq!(cart, xyz());
    }

    #[test]
    fn test_quick_add_uses_first_options() {
        let items = items();
        let cart = reduce(Cart::default(), &CartAction::quick_add(items[3].clone()));
        assert_eq!(summary(&cart), vec![("4".to_string(), "7".to_string(), "White".to_string(), 1)]);
    }

    #[test]
    fn test_update_zero_removes_preserving_order() {
        let cart = reduce(xyz(), &CartAction::update_at(1, 0));
        let ids: Vec<&str> = cart.lines().iter().map(|l| l.item.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn test_update_negative_removes() {
        let cart = reduce(xyz(), &CartAction::update_at(0, -3));
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].item.id, "2");
    }

    #[test]
    fn test_update_sets_absolute_quantity() {
        let cart = reduce(xyz(), &CartAction::update_at(1, 7));
        assert_eq!(cart.lines()[1].quantity, 7);
        assert_eq!(cart.lines()[0].quantity, 1);
    }

    #[test]
    fn test_update_by_key() {
        let key = CartLineKey::new("4", "10", "White");
        let cart = reduce(xyz(), &CartAction::update_key(key.clone(), 4));
        assert_eq!(cart.find(&key).unwrap().quantity, 4);

        let cart = reduce(cart, &CartAction::update_key(key.clone(), 0));
        assert!(cart.find(&key).is_none());
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_remove_by_index_and_key() {
        let cart = reduce(xyz(), &CartAction::remove_at(0));
        assert_eq!(cart.lines()[0].item.id, "2");

        let cart = reduce(cart, &CartAction::remove_key(CartLineKey::new("2", "L", "Blue")));
        assert_eq!(summary(&cart), vec![("4".to_string(), "10".to_string(), "White".to_string(), 1)]);
    }

    #[test]
    fn test_out_of_range_is_noop() {
        let cart = reduce(xyz(), &CartAction::remove_at(1));
        assert_eq!(cart.len(), 2);

        let after = reduce(cart.clone(), &CartAction::remove_at(99));
        assert_eq!(after, cart);

        let after = reduce(cart.clone(), &CartAction::update_at(2, 5));
        assert_eq!(after, cart);

        let after = reduce(cart.clone(), &CartAction::update_at(usize::MAX, 0));
        assert_eq!(after, cart);
    }

    #[test]
    fn test_unknown_key_is_noop() {
        let missing = CartLineKey::new("1", "XXL", "Black");
        assert_eq!(reduce(xyz(), &CartAction::remove_key(missing.clone())), xyz());
        assert_eq!(reduce(xyz(), &CartAction::update_key(missing, 3)), xyz());
    }

    #[test]
    fn test_stale_key_survives_double_remove() {
        // Two clicks on the same rendered line: the second one must not hit a neighbour
        let key = CartLineKey::new("1", "M", "Black");
        let cart = apply_all(
            xyz(),
            &[
                CartAction::remove_key(key.clone()),
                CartAction::remove_key(key),
            ],
        );
        let ids: Vec<&str> = cart.lines().iter().map(|l| l.item.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "4"]);
    }

    #[test]
    fn test_clear_is_absorbing() {
        let cart = apply_all(
            xyz(),
            &[
                CartAction::Clear,
                CartAction::remove_at(0),
                CartAction::update_at(0, 4),
                CartAction::update_at(1, 0),
                CartAction::remove_key(CartLineKey::new("1", "M", "Black")),
            ],
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_huge_update_saturates() {
        let cart = reduce(xyz(), &CartAction::update_at(0, i64::MAX));
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
    }

    #[test]
    fn test_totals() {
        let cart = xyz();
        assert_eq!(cart.item_count(), 4);
        // 29.99 + 2 * 89.99 + 119.99
        assert_eq!(cart.subtotal().to_string(), "329.96");
    }
}
