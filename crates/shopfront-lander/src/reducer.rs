//! Reducer for the terminal-only state
//!
//! Pure like the shopfront reducers, but it reads the current shopfront
//! snapshot to know how many rows each table has.

use shopfront_core::domain_models::{Category, CategoryFilter, Page, SortOrder, TopLevelView};
use shopfront_core::view_models::CatalogViewModel;
use shopfront_core::AppState;
use strum::IntoEnumIterator;

use crate::actions::{BrowseAction, PaletteAction, UiAction};
use crate::state::{AdminTab, Focus, UiState};

pub fn reduce(mut ui: UiState, action: &UiAction, state: &AppState) -> UiState {
    match action {
        UiAction::Browse(action) => browse(&mut ui, action, state),
        UiAction::Palette(action) => palette(&mut ui, action),
        UiAction::SetStatus(message) => ui.status = Some(message.clone()),
        UiAction::ToggleHelp => ui.show_help = !ui.show_help,
        UiAction::Quit => ui.running = false,
        // Translated or forwarded before they get here
        UiAction::KeyPressed(_) | UiAction::Store(_) => {}
    }
    ui
}

fn browse(ui: &mut UiState, action: &BrowseAction, state: &AppState) {
    match action {
        BrowseAction::Next => {
            if let Some((selected, len)) = focused_table(ui, state) {
                *selected = (*selected + 1).min(len.saturating_sub(1));
            }
        }
        BrowseAction::Previous => {
            if let Some((selected, len)) = focused_table(ui, state) {
                *selected = selected.saturating_sub(1).min(len.saturating_sub(1));
            }
        }
        BrowseAction::ToggleFocus => {
            ui.focus = match ui.focus {
                Focus::Catalog => Focus::Cart,
                Focus::Cart => Focus::Catalog,
            };
        }
        BrowseAction::Focus(focus) => ui.focus = *focus,
        BrowseAction::CycleCategory => {
            let filters: Vec<CategoryFilter> = std::iter::once(CategoryFilter::All)
                .chain(Category::iter().map(CategoryFilter::Only))
                .collect();
            ui.filter = next_of(&filters, ui.filter);
            ui.catalog_selected = 0;
        }
        BrowseAction::CycleSort => {
            let orders: Vec<SortOrder> = SortOrder::iter().collect();
            ui.sort = next_of(&orders, ui.sort);
            ui.catalog_selected = 0;
        }
        BrowseAction::SetFilter(filter) => {
            ui.filter = *filter;
            ui.catalog_selected = 0;
        }
        BrowseAction::SetSort(sort) => {
            ui.sort = *sort;
            ui.catalog_selected = 0;
        }
        BrowseAction::Select(id) => {
            let sort = ui.sort;
            let position = |filter| {
                CatalogViewModel::from_state(state, filter, sort)
                    .items
                    .iter()
                    .position(|item| &item.id == id)
            };
            let found = match position(ui.filter) {
                Some(index) => Some(index),
                None => {
                    let index = position(CategoryFilter::All);
                    if index.is_some() {
                        ui.filter = CategoryFilter::All;
                    }
                    index
                }
            };
            if let Some(index) = found {
                ui.catalog_selected = index;
                ui.focus = Focus::Catalog;
            }
        }
        BrowseAction::CycleAdminTab => {
            let tabs: Vec<AdminTab> = AdminTab::iter().collect();
            ui.admin_tab = next_of(&tabs, ui.admin_tab);
            ui.admin_selected = 0;
        }
    }
}

/// The selection the arrow keys move, with its table's row count
///
/// `None` where nothing is selectable: the profile page and the overview tab.
fn focused_table<'a>(ui: &'a mut UiState, state: &AppState) -> Option<(&'a mut usize, usize)> {
    match (state.navigation.view, state.navigation.page) {
        (TopLevelView::Admin, _) => match ui.admin_tab {
            AdminTab::Overview => None,
            AdminTab::Products => Some((&mut ui.admin_selected, state.catalog.len())),
            AdminTab::Orders => Some((&mut ui.admin_selected, state.orders.len())),
        },
        (TopLevelView::Store, Page::Profile) => None,
        (TopLevelView::Store, Page::Home) => match ui.focus {
            Focus::Catalog => {
                let len = CatalogViewModel::from_state(state, ui.filter, ui.sort).items.len();
                Some((&mut ui.catalog_selected, len))
            }
            Focus::Cart => Some((&mut ui.cart_selected, state.cart.len())),
        },
    }
}

fn palette(ui: &mut UiState, action: &PaletteAction) {
    match action {
        PaletteAction::Open => {
            ui.palette = Some(String::new());
            ui.status = None;
        }
        PaletteAction::Char(c) => {
            if let Some(text) = ui.palette.as_mut() {
                text.push(*c);
            }
        }
        PaletteAction::Backspace => {
            if let Some(text) = ui.palette.as_mut() {
                text.pop();
            }
        }
        PaletteAction::Clear => {
            if let Some(text) = ui.palette.as_mut() {
                text.clear();
            }
        }
        PaletteAction::Close | PaletteAction::Execute => ui.palette = None,
    }
}

/// The value after `current` in `all`, wrapping around
fn next_of<T: PartialEq + Copy>(all: &[T], current: T) -> T {
    let next = all
        .iter()
        .position(|value| *value == current)
        .map_or(0, |index| (index + 1) % all.len());
    all.get(next).copied().unwrap_or(current)
}
