//! Front end actions
//!
//! The terminal keeps its own small store around the shopfront store. Anything
//! that changes catalog, cart, session, orders or navigation is wrapped in
//! [`UiAction::Store`] and forwarded; everything else only touches [`UiState`].
//!
//! [`UiState`]: crate::state::UiState

use ratatui::crossterm::event::KeyEvent;
use shopfront_core::domain_models::{CategoryFilter, SortOrder};
use shopfront_core::Action;

use crate::state::{Focus, StatusMessage};

#[derive(Debug, Clone)]
pub enum UiAction {
    /// Raw key press, translated by the keyboard middleware
    KeyPressed(KeyEvent),
    /// Forwarded to the shopfront store
    Store(Action),
    Browse(BrowseAction),
    Palette(PaletteAction),
    SetStatus(StatusMessage),
    ToggleHelp,
    Quit,
}

impl UiAction {
    /// Short tag for log lines
    pub fn name(&self) -> &'static str {
        match self {
            UiAction::KeyPressed(_) => "Ui::KeyPressed",
            UiAction::Store(action) => action.name(),
            UiAction::Browse(_) => "Ui::Browse",
            UiAction::Palette(_) => "Ui::Palette",
            UiAction::SetStatus(_) => "Ui::SetStatus",
            UiAction::ToggleHelp => "Ui::ToggleHelp",
            UiAction::Quit => "Ui::Quit",
        }
    }
}

/// Moving around the storefront and the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    /// Next row of the focused table
    Next,
    Previous,
    ToggleFocus,
    Focus(Focus),
    CycleCategory,
    CycleSort,
    SetFilter(CategoryFilter),
    SetSort(SortOrder),
    /// Highlight a product by id, widening the filter if it is hidden
    Select(String),
    CycleAdminTab,
}

/// Editing the `:` command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaletteAction {
    Open,
    Char(char),
    Backspace,
    /// Ctrl+U
    Clear,
    Close,
    /// Run the typed command; the palette closes afterwards
    Execute,
}
