//! KeyboardMiddleware - translates key presses into storefront actions
//!
//! ## Layer 1: Priority Keys
//! Ctrl+C quits and Esc closes whatever overlay is open, in every context.
//!
//! ## Layer 2: Text Input
//! While the `:` palette is open, characters, Backspace and Enter edit and run
//! the command line. Nothing else gets through.
//!
//! ## Layer 3: Keymap
//! Keys are looked up against the current view and page. Cart edits address
//! the highlighted line by its key, so a line that moved since the last frame
//! is never hit by mistake.

use crate::actions::{BrowseAction, PaletteAction, UiAction};
use crate::commands::CommandError;
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::{clamp_selection, Focus, StatusMessage, UiState};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use shopfront_core::actions::{CartAction, NavigationAction};
use shopfront_core::domain_models::{Page, TopLevelView};
use shopfront_core::view_models::CatalogViewModel;
use shopfront_core::{Action, AppState};

#[derive(Debug, Default)]
pub struct KeyboardMiddleware;

impl KeyboardMiddleware {
    pub fn new() -> Self {
        Self
    }

    fn handle_key(&self, key: KeyEvent, state: &AppState, ui: &UiState, dispatcher: &Dispatcher) {
        // LAYER 1: Priority keys
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            log::debug!("Layer 1: Ctrl+C - dispatching Quit");
            dispatcher.dispatch(UiAction::Quit);
            return;
        }

        if key.code == KeyCode::Esc {
            if ui.palette_open() {
                dispatcher.dispatch(UiAction::Palette(PaletteAction::Close));
            } else if ui.show_help {
                dispatcher.dispatch(UiAction::ToggleHelp);
            }
            return;
        }

        // LAYER 2: Text input
        if ui.palette_open() {
            let action = match key.code {
                KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Some(PaletteAction::Clear)
                }
                KeyCode::Char(c)
                    if !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    Some(PaletteAction::Char(c))
                }
                KeyCode::Backspace => Some(PaletteAction::Backspace),
                KeyCode::Enter => Some(PaletteAction::Execute),
                _ => None,
            };
            if let Some(action) = action {
                dispatcher.dispatch(UiAction::Palette(action));
            }
            return;
        }

        // The help overlay only listens for its own toggle
        if ui.show_help {
            if key.code == KeyCode::Char('?') {
                dispatcher.dispatch(UiAction::ToggleHelp);
            }
            return;
        }

        // LAYER 3: Keymap
        let actions = keymap(key, state, ui);
        if actions.is_empty() {
            log::trace!("Layer 3: no binding for {:?}", key.code);
        }
        for action in actions {
            dispatcher.dispatch(action);
        }
    }
}

impl Middleware for KeyboardMiddleware {
    fn handle(
        &mut self,
        action: &UiAction,
        state: &AppState,
        ui: &UiState,
        dispatcher: &Dispatcher,
    ) -> bool {
        // Only intercept key presses
        if let UiAction::KeyPressed(key) = action {
            log::debug!("KeyboardMiddleware: key={:?}", key);
            self.handle_key(*key, state, ui, dispatcher);
            return false;
        }

        true
    }
}

fn navigate(action: NavigationAction) -> UiAction {
    UiAction::Store(Action::Navigation(action))
}

fn cart(action: CartAction) -> UiAction {
    UiAction::Store(Action::Cart(action))
}

fn browse(action: BrowseAction) -> UiAction {
    UiAction::Browse(action)
}

/// Actions bound to `key` in the current context; empty when unbound
fn keymap(key: KeyEvent, state: &AppState, ui: &UiState) -> Vec<UiAction> {
    // Bindings that work everywhere
    match key.code {
        KeyCode::Char('q') => return vec![UiAction::Quit],
        KeyCode::Char(':') => return vec![UiAction::Palette(PaletteAction::Open)],
        KeyCode::Char('?') => return vec![UiAction::ToggleHelp],
        KeyCode::Char('1') => return vec![navigate(NavigationAction::SetView(TopLevelView::Store))],
        KeyCode::Char('2') => return vec![navigate(NavigationAction::SetView(TopLevelView::Admin))],
        KeyCode::Char('j') | KeyCode::Down => return vec![browse(BrowseAction::Next)],
        KeyCode::Char('k') | KeyCode::Up => return vec![browse(BrowseAction::Previous)],
        _ => {}
    }

    match (state.navigation.view, state.navigation.page) {
        (TopLevelView::Admin, _) => match key.code {
            KeyCode::Tab | KeyCode::BackTab => vec![browse(BrowseAction::CycleAdminTab)],
            _ => Vec::new(),
        },
        (TopLevelView::Store, page) => match key.code {
            KeyCode::Char('h') => vec![navigate(NavigationAction::SetPage(Page::Home))],
            KeyCode::Char('p') if state.is_signed_in() => {
                vec![navigate(NavigationAction::SetPage(Page::Profile))]
            }
            KeyCode::Char('p') => vec![UiAction::SetStatus(StatusMessage::error(
                CommandError::NotSignedIn.to_string(),
            ))],
            _ if page == Page::Home => home_keymap(key, state, ui),
            _ => Vec::new(),
        },
    }
}

/// Bindings of the catalog and cart tables
fn home_keymap(key: KeyEvent, state: &AppState, ui: &UiState) -> Vec<UiAction> {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => vec![browse(BrowseAction::ToggleFocus)],
        KeyCode::Char('c') => vec![browse(BrowseAction::CycleCategory)],
        KeyCode::Char('s') => vec![browse(BrowseAction::CycleSort)],
        KeyCode::Char('x') if !state.cart.is_empty() => vec![
            cart(CartAction::Clear),
            UiAction::SetStatus(StatusMessage::info("Cart cleared")),
        ],
        _ => match ui.focus {
            Focus::Catalog => catalog_keymap(key, state, ui),
            Focus::Cart => cart_keymap(key, state, ui),
        },
    }
}

fn catalog_keymap(key: KeyEvent, state: &AppState, ui: &UiState) -> Vec<UiAction> {
    if !matches!(key.code, KeyCode::Enter | KeyCode::Char('a')) {
        return Vec::new();
    }

    let view = CatalogViewModel::from_state(state, ui.filter, ui.sort);
    let Some(item) = clamp_selection(ui.catalog_selected, view.items.len())
        .and_then(|index| view.items.get(index))
    else {
        return Vec::new();
    };

    if !item.in_stock {
        return vec![UiAction::SetStatus(StatusMessage::error(format!(
            "{} is out of stock",
            item.name
        )))];
    }

    let (size, color) = item.default_selection();
    let message = format!("Added 1 x {} ({}, {})", item.name, size, color);
    vec![
        cart(CartAction::quick_add(item.clone())),
        UiAction::SetStatus(StatusMessage::info(message)),
    ]
}

fn cart_keymap(key: KeyEvent, state: &AppState, ui: &UiState) -> Vec<UiAction> {
    let lines = state.cart.lines();
    let Some(line) = clamp_selection(ui.cart_selected, lines.len()).and_then(|i| lines.get(i))
    else {
        return Vec::new();
    };
    let quantity = i64::from(line.quantity);

    match key.code {
        KeyCode::Char('+') | KeyCode::Char('=') => {
            vec![cart(CartAction::update_key(line.key(), quantity + 1))]
        }
        KeyCode::Char('-') if quantity <= 1 => vec![
            cart(CartAction::update_key(line.key(), 0)),
            UiAction::SetStatus(StatusMessage::info(format!("Removed {}", line.item.name))),
        ],
        KeyCode::Char('-') => vec![cart(CartAction::update_key(line.key(), quantity - 1))],
        KeyCode::Char('d') | KeyCode::Delete => vec![
            cart(CartAction::remove_key(line.key())),
            UiAction::SetStatus(StatusMessage::info(format!("Removed {}", line.item.name))),
        ],
        _ => Vec::new(),
    }
}
