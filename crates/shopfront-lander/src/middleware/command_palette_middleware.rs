//! CommandPaletteMiddleware - runs the command typed after `:`
//!
//! On Execute the typed text is parsed and checked against the current
//! snapshot. A valid command turns into store and browse actions plus a
//! status line; an invalid one only produces the error message. The reducer
//! closes the palette either way.

use crate::actions::{BrowseAction, PaletteAction, UiAction};
use crate::commands::{self, Command, CommandError};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{Focus, StatusMessage, UiState};
use crate::views::money;
use shopfront_core::actions::{CartAction, NavigationAction, OrderAction, SessionAction};
use shopfront_core::domain_models::{Page, Session, TopLevelView};
use shopfront_core::seed::{sample_addresses, sample_order_history};
use shopfront_core::view_models::{CartViewModel, CatalogViewModel};
use shopfront_core::{Action, AppState};

/// What a command does once it passed validation
#[derive(Debug, Default)]
pub struct Outcome {
    pub actions: Vec<UiAction>,
    /// Shown in the status bar
    pub message: Option<String>,
}

impl Outcome {
    fn new(actions: Vec<UiAction>) -> Self {
        Self {
            actions,
            message: None,
        }
    }

    fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

pub struct CommandPaletteMiddleware {
    currency_symbol: String,
}

impl CommandPaletteMiddleware {
    pub fn new(currency_symbol: impl Into<String>) -> Self {
        Self {
            currency_symbol: currency_symbol.into(),
        }
    }
}

impl Middleware for CommandPaletteMiddleware {
    fn handle(
        &mut self,
        action: &UiAction,
        state: &AppState,
        ui: &UiState,
        dispatcher: &Dispatcher,
    ) -> bool {
        let UiAction::Palette(PaletteAction::Execute) = action else {
            return true;
        };
        let text = ui.palette.as_deref().unwrap_or_default();

        match commands::parse(text).and_then(|command| run(command, state, ui, &self.currency_symbol))
        {
            Ok(outcome) => {
                log::debug!(
                    "CommandPaletteMiddleware: {:?} -> {} actions",
                    text,
                    outcome.actions.len()
                );
                for action in outcome.actions {
                    dispatcher.dispatch(action);
                }
                if let Some(message) = outcome.message {
                    dispatcher.dispatch(UiAction::SetStatus(StatusMessage::info(message)));
                }
            }
            Err(e) => {
                log::debug!("CommandPaletteMiddleware: rejected {:?}: {}", text, e);
                dispatcher.dispatch(UiAction::SetStatus(StatusMessage::error(e.to_string())));
            }
        }

        // Let the reducer close the palette
        true
    }
}

fn store(action: Action) -> UiAction {
    UiAction::Store(action)
}

fn navigate(action: NavigationAction) -> UiAction {
    store(Action::Navigation(action))
}

/// Cart position from a 1-based line number, if the cart has that line
fn cart_line(state: &AppState, line: usize) -> Result<usize, CommandError> {
    let index = line.checked_sub(1).ok_or(CommandError::ZeroLine)?;
    if index < state.cart.len() {
        Ok(index)
    } else {
        Err(CommandError::NotInCart(format!("line {}", line)))
    }
}

/// Validate `command` against the snapshot and translate it into actions
pub fn run(
    command: Command,
    state: &AppState,
    ui: &UiState,
    symbol: &str,
) -> Result<Outcome, CommandError> {
    let outcome = match command {
        Command::Empty => Outcome::default(),
        Command::Help => Outcome::new(vec![UiAction::ToggleHelp]),
        Command::Quit => Outcome::new(vec![UiAction::Quit]),

        Command::Catalog { filter, sort } => {
            let sort = sort.unwrap_or(ui.sort);
            let view = CatalogViewModel::from_state(state, filter, sort);
            Outcome::new(vec![
                navigate(NavigationAction::SetView(TopLevelView::Store)),
                navigate(NavigationAction::SetPage(Page::Home)),
                UiAction::Browse(BrowseAction::SetFilter(filter)),
                UiAction::Browse(BrowseAction::SetSort(sort)),
                UiAction::Browse(BrowseAction::Focus(Focus::Catalog)),
            ])
            .with_message(format!(
                "{} - {}: {}",
                filter.label(),
                sort.label(),
                view.summary()
            ))
        }

        Command::Show(id) => {
            let item = state.catalog.get(&id).ok_or_else(|| CommandError::UnknownItem(id.clone()))?;
            Outcome::new(vec![
                navigate(NavigationAction::SetView(TopLevelView::Store)),
                navigate(NavigationAction::SetPage(Page::Home)),
                UiAction::Browse(BrowseAction::Select(id)),
            ])
            .with_message(item.name.clone())
        }

        Command::Add {
            id,
            quantity,
            size,
            color,
        } => {
            let item = state
                .catalog
                .get(&id)
                .cloned()
                .ok_or(CommandError::UnknownItem(id))?;

            let (default_size, default_color) = item.default_selection();
            let size = size.unwrap_or_else(|| default_size.to_string());
            let color = color.unwrap_or_else(|| default_color.to_string());
            if !item.sizes.is_empty() && !item.has_size(&size) {
                return Err(CommandError::UnavailableOption {
                    item: item.name.clone(),
                    what: "size",
                    value: size,
                });
            }
            if !item.colors.is_empty() && !item.has_color(&color) {
                return Err(CommandError::UnavailableOption {
                    item: item.name.clone(),
                    what: "color",
                    value: color,
                });
            }

            let message = format!("Added {} x {} ({}, {})", quantity, item.name, size, color);
            Outcome::new(vec![store(Action::Cart(CartAction::add(
                item, quantity, size, color,
            )))])
            .with_message(message)
        }

        Command::Set { line, quantity } => {
            let index = cart_line(state, line)?;
            let name = &state.cart.lines()[index].item.name;
            let message = if quantity <= 0 {
                format!("Removed {}", name)
            } else {
                format!("{} now x {}", name, quantity)
            };
            Outcome::new(vec![store(Action::Cart(CartAction::update_at(index, quantity)))])
                .with_message(message)
        }

        Command::SetKey { key, quantity } => {
            let line = state
                .cart
                .find(&key)
                .ok_or_else(|| CommandError::NotInCart(key.to_string()))?;
            let message = if quantity <= 0 {
                format!("Removed {}", line.item.name)
            } else {
                format!("{} now x {}", line.item.name, quantity)
            };
            Outcome::new(vec![store(Action::Cart(CartAction::update_key(key, quantity)))])
                .with_message(message)
        }

        Command::Remove(line) => {
            let index = cart_line(state, line)?;
            let message = format!("Removed {}", state.cart.lines()[index].item.name);
            Outcome::new(vec![store(Action::Cart(CartAction::remove_at(index)))])
                .with_message(message)
        }

        Command::Clear => {
            Outcome::new(vec![store(Action::Cart(CartAction::Clear))]).with_message("Cart cleared")
        }

        Command::Cart => {
            let cart = CartViewModel::from_state(state);
            let message = if cart.is_empty() {
                "Your cart is empty".to_string()
            } else {
                format!(
                    "{} items, subtotal {}",
                    cart.item_count,
                    money(symbol, cart.subtotal)
                )
            };
            Outcome::new(vec![
                navigate(NavigationAction::SetView(TopLevelView::Store)),
                navigate(NavigationAction::SetPage(Page::Home)),
                UiAction::Browse(BrowseAction::Focus(Focus::Cart)),
            ])
            .with_message(message)
        }

        Command::Login { email, name } => {
            let session = Session::sign_in(&email, &name).with_addresses(sample_addresses());
            let message = format!("Welcome, {}", session.name);

            // Returning users keep the history they already have
            let history = if state.orders.iter().any(|order| order.user_id == session.id) {
                None
            } else {
                let mut orders = state.orders.clone();
                orders.extend(sample_order_history(
                    &session,
                    state.catalog.items(),
                    state.orders.len() + 1,
                ));
                Some(orders)
            };

            let mut actions = vec![store(Action::Session(SessionAction::Set(Some(session))))];
            if let Some(orders) = history {
                actions.push(store(Action::Orders(OrderAction::Set(orders))));
            }
            Outcome::new(actions).with_message(message)
        }

        Command::Logout => {
            let mut actions = vec![store(Action::Session(SessionAction::Set(None)))];
            if state.navigation.page == Page::Profile {
                actions.push(navigate(NavigationAction::SetPage(Page::Home)));
            }
            Outcome::new(actions).with_message("Signed out")
        }

        Command::View(view) => Outcome::new(vec![navigate(NavigationAction::SetView(view))]),
        Command::Page(page) => Outcome::new(vec![navigate(NavigationAction::SetPage(page))]),
        Command::Admin => Outcome::new(vec![navigate(NavigationAction::SetView(
            TopLevelView::Admin,
        ))]),

        Command::Profile => {
            if !state.is_signed_in() {
                return Err(CommandError::NotSignedIn);
            }
            Outcome::new(vec![
                navigate(NavigationAction::SetView(TopLevelView::Store)),
                navigate(NavigationAction::SetPage(Page::Profile)),
            ])
        }
    };

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::parse;
    use pretty_assertions::assert_eq;
    use shopfront_core::actions::CatalogAction;
    use shopfront_core::apply;
    use shopfront_core::seed::{sample_catalog, sample_orders};

    fn state() -> AppState {
        let catalog = sample_catalog();
        let orders = sample_orders(&catalog);
        let state = apply(&AppState::default(), &Action::Catalog(CatalogAction::Set(catalog)));
        apply(&state, &Action::Orders(OrderAction::Set(orders)))
    }

    fn exec(line: &str, state: &AppState) -> Result<Outcome, CommandError> {
        run(parse(line)?, state, &UiState::default(), "$")
    }

    /// Apply the store actions of an outcome, as the app would
    fn apply_outcome(state: &AppState, outcome: &Outcome) -> AppState {
        outcome.actions.iter().fold(state.clone(), |state, action| match action {
            UiAction::Store(action) => apply(&state, action),
            _ => state,
        })
    }

    fn names(outcome: &Outcome) -> Vec<&'static str> {
        outcome.actions.iter().map(UiAction::name).collect()
    }

    #[test]
    fn test_add_reports_what_was_added() {
        let state = state();
        let outcome = exec("add 6 2 32 Brown", &state).unwrap();
        assert_eq!(outcome.message.as_deref(), Some("Added 2 x Leather Belt (32, Brown)"));

        let state = apply_outcome(&state, &outcome);
        assert_eq!(state.cart.item_count(), 2);
    }

    #[test]
    fn test_add_validates_options_and_ids() {
        let state = state();
        assert_eq!(
            exec("add 1 1 XXL", &state).unwrap_err(),
            CommandError::UnavailableOption {
                item: "Premium Cotton T-Shirt".to_string(),
                what: "size",
                value: "XXL".to_string()
            }
        );
        assert!(exec("add 1 1 M Purple", &state).is_err());
        assert_eq!(
            exec("add 99", &state).unwrap_err(),
            CommandError::UnknownItem("99".to_string())
        );
        assert_eq!(exec("add 6 0", &state).unwrap_err(), CommandError::ZeroQuantity);
    }

    #[test]
    fn test_line_numbers_are_one_based_and_checked() {
        let mut state = state();
        for id in ["1", "2", "3"] {
            state = apply_outcome(&state, &exec(&format!("add {}", id), &state).unwrap());
        }

        let outcome = exec("set 2 5", &state).unwrap();
        assert_eq!(outcome.message.as_deref(), Some("Classic Denim Jacket now x 5"));
        state = apply_outcome(&state, &outcome);

        let outcome = exec("remove 1", &state).unwrap();
        assert_eq!(outcome.message.as_deref(), Some("Removed Premium Cotton T-Shirt"));
        state = apply_outcome(&state, &outcome);

        let lines: Vec<(&str, u32)> = state
            .cart
            .lines()
            .iter()
            .map(|line| (line.item.id.as_str(), line.quantity))
            .collect();
        assert_eq!(lines, vec![("2", 5), ("3", 1)]);

        assert_eq!(
            exec("remove 9", &state).unwrap_err(),
            CommandError::NotInCart("line 9".to_string())
        );
        assert_eq!(
            exec("set 1 0", &state).unwrap().message.as_deref(),
            Some("Removed Classic Denim Jacket")
        );
    }

    #[test]
    fn test_setkey_needs_existing_line() {
        let state = state();
        let state = apply_outcome(&state, &exec("add 6 1 32 Brown", &state).unwrap());

        let state = apply_outcome(&state, &exec("setkey 6 32 Brown 4", &state).unwrap());
        assert_eq!(state.cart.lines()[0].quantity, 4);

        assert_eq!(
            exec("setkey 6 34 Brown 1", &state).unwrap_err(),
            CommandError::NotInCart("6 (34, Brown)".to_string())
        );
    }

    #[test]
    fn test_cart_summary() {
        let state = state();
        assert_eq!(
            exec("cart", &state).unwrap().message.as_deref(),
            Some("Your cart is empty")
        );

        let state = apply_outcome(&state, &exec("add 6 2", &state).unwrap());
        let outcome = exec("cart", &state).unwrap();
        assert_eq!(outcome.message.as_deref(), Some("2 items, subtotal $91.98"));
        assert!(matches!(
            outcome.actions.last(),
            Some(UiAction::Browse(BrowseAction::Focus(Focus::Cart)))
        ));
    }

    #[test]
    fn test_login_seeds_addresses_and_history_once() {
        let state = state();
        let outcome = exec("login jane@example.com Jane Doe", &state).unwrap();
        assert_eq!(outcome.message.as_deref(), Some("Welcome, Jane Doe"));
        assert_eq!(names(&outcome), vec!["Session::Set", "Orders::Set"]);

        let state = apply_outcome(&state, &outcome);
        let session = state.session.as_ref().unwrap();
        assert_eq!(session.addresses.len(), 2);
        assert_eq!(session.default_address().unwrap().name, "Home");
        assert_eq!(state.orders.len(), 6);
        assert_eq!(state.orders[4].id, "#ORD-005");
        assert_eq!(state.orders[4].user_id, "user-jane@example.com");

        // Signing in again keeps the existing history
        let again = exec("login jane@example.com Jane Doe", &state).unwrap();
        assert_eq!(names(&again), vec!["Session::Set"]);
    }

    #[test]
    fn test_profile_and_logout() {
        let state = state();
        assert_eq!(exec("profile", &state).unwrap_err(), CommandError::NotSignedIn);

        let state = apply_outcome(&state, &exec("login a@b.c Ann", &state).unwrap());
        let state = apply_outcome(&state, &exec("profile", &state).unwrap());
        assert_eq!(state.navigation.page, Page::Profile);

        let outcome = exec("logout", &state).unwrap();
        assert_eq!(names(&outcome), vec!["Session::Set", "Navigation::SetPage"]);
        let state = apply_outcome(&state, &outcome);
        assert!(!state.is_signed_in());
        assert_eq!(state.navigation.page, Page::Home);
    }

    #[test]
    fn test_catalog_keeps_current_sort_unless_given() {
        let state = state();
        let ui = UiState::new(shopfront_core::domain_models::SortOrder::Rating);

        let outcome = run(parse("catalog men").unwrap(), &state, &ui, "$").unwrap();
        assert_eq!(
            outcome.message.as_deref(),
            Some("Men - Highest Rated: Showing 2 of 6 products")
        );

        let outcome = run(parse("catalog men price-low").unwrap(), &state, &ui, "$").unwrap();
        assert!(outcome
            .message
            .unwrap()
            .starts_with("Men - Price: Low to High"));
    }

    #[test]
    fn test_show_unknown_item() {
        assert_eq!(
            exec("show 42", &state()).unwrap_err(),
            CommandError::UnknownItem("42".to_string())
        );
        let outcome = exec("show 4", &state()).unwrap();
        assert_eq!(outcome.message.as_deref(), Some("Running Sneakers"));
    }

    #[test]
    fn test_execute_reports_parse_errors() {
        use std::sync::mpsc;

        let (tx, rx) = mpsc::channel();
        let ui = UiState {
            palette: Some("checkout now".to_string()),
            ..UiState::default()
        };
        let mut middleware = CommandPaletteMiddleware::new("$");
        let passed = middleware.handle(
            &UiAction::Palette(PaletteAction::Execute),
            &state(),
            &ui,
            &Dispatcher::new(tx),
        );

        assert!(passed);
        let dispatched: Vec<UiAction> = rx.try_iter().collect();
        assert!(matches!(
            dispatched.as_slice(),
            [UiAction::SetStatus(message)]
                if message.text == "Unknown command 'checkout' (try 'help')"
        ));
    }
}
