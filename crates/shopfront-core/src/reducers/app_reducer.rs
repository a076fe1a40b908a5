use crate::actions::{Action, CatalogAction, GlobalAction, OrderAction, SessionAction};
use crate::reducers::{cart_reducer, navigation_reducer};
use crate::state::{AppState, Catalog};

/// Compute the next snapshot without touching the current one
pub fn apply(current: &AppState, action: &Action) -> AppState {
    reduce(current.clone(), action)
}

/// Root reducer - handles whole-slice replacements and orchestrates the sub-reducers
pub fn reduce(mut state: AppState, action: &Action) -> AppState {
    match action {
        Action::Catalog(CatalogAction::Set(items)) => {
            log::debug!("Catalog replaced with {} items", items.len());
            state.catalog = Catalog::new(items.clone());
        }
        Action::Session(SessionAction::Set(session)) => {
            match session {
                Some(session) => log::info!("Signed in as {}", session.email),
                None => log::info!("Signed out"),
            }
            state.session = session.clone();
        }
        Action::Orders(OrderAction::Set(orders)) => {
            state.orders = orders.clone();
        }
        Action::Global(GlobalAction::SetLoading(loading)) => {
            state.loading = *loading;
        }
        Action::Cart(cart_action) => {
            state.cart = cart_reducer::reduce(state.cart, cart_action);
        }
        Action::Navigation(navigation_action) => {
            state.navigation = navigation_reducer::reduce(state.navigation, navigation_action);
        }
        Action::Bootstrap(_) | Action::None => {
            // Side effects only - handled by middleware
        }
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::{CartAction, NavigationAction};
    use crate::domain_models::{Page, Session, TopLevelView};
    use crate::seed::sample_catalog;
    use pretty_assertions::assert_eq;

    fn seeded() -> AppState {
        apply(
            &AppState::default(),
            &Action::Catalog(CatalogAction::Set(sample_catalog())),
        )
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert!(state.catalog.is_empty());
        assert!(state.cart.is_empty());
        assert!(state.session.is_none());
        assert!(state.orders.is_empty());
        assert!(!state.loading);
        assert_eq!(state.navigation.view, TopLevelView::Store);
        assert_eq!(state.navigation.page, Page::Home);
    }

    #[test]
    fn test_set_catalog_is_idempotent() {
        let once = seeded();
        let twice = apply(&once, &Action::Catalog(CatalogAction::Set(sample_catalog())));
        assert_eq!(once.catalog, twice.catalog);
        assert_eq!(twice.catalog.len(), 6);
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let before = seeded();
        let item = before.catalog.get("1").unwrap().clone();
        let after = apply(&before, &Action::Cart(CartAction::add(item, 2, "M", "Black")));

        assert!(before.cart.is_empty());
        assert_eq!(after.cart.len(), 1);
    }

    #[test]
    fn test_none_returns_equal_state() {
        let state = seeded();
        assert_eq!(apply(&state, &Action::None), state);
    }

    #[test]
    fn test_session_replaced_wholesale() {
        let mut admin = Session::sign_in("root@shop.test", "Root");
        admin.is_admin = true;

        let state = apply(
            &AppState::default(),
            &Action::Session(SessionAction::Set(Some(admin))),
        );
        assert!(state.is_admin());

        let state = apply(&state, &Action::Session(SessionAction::Set(None)));
        assert!(!state.is_signed_in());
        assert!(!state.is_admin());
        assert_eq!(state, AppState::default());
    }

    #[test]
    fn test_set_loading() {
        let state = apply(
            &AppState::default(),
            &Action::Global(GlobalAction::SetLoading(true)),
        );
        assert!(state.loading);
    }

    #[test]
    fn test_orders_replaced() {
        let state = apply(&AppState::default(), &Action::Orders(OrderAction::Set(vec![])));
        assert!(state.orders.is_empty());
    }

    #[test]
    fn test_navigation_routed_to_sub_reducer() {
        let state = apply(
            &AppState::default(),
            &Action::Navigation(NavigationAction::SetView(TopLevelView::Admin)),
        );
        assert_eq!(state.navigation.view, TopLevelView::Admin);
        assert_eq!(state.navigation.page, Page::Home);
    }
}
