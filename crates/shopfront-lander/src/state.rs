//! Terminal-only state
//!
//! Selection, focus and overlays. None of it belongs in the shopfront store:
//! a different front end would keep different values here.

use shopfront_core::domain_models::{CategoryFilter, SortOrder};
use strum::{Display, EnumIter};

/// Which storefront table the arrow keys move in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    Catalog,
    Cart,
}

/// Tabs of the admin dashboard
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, EnumIter)]
pub enum AdminTab {
    #[default]
    Overview,
    Products,
    Orders,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One line of feedback in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    pub running: bool,
    pub focus: Focus,
    pub filter: CategoryFilter,
    pub sort: SortOrder,
    /// Row in the filtered, sorted catalog table
    pub catalog_selected: usize,
    pub cart_selected: usize,
    /// Row in the table of the current admin tab
    pub admin_selected: usize,
    pub admin_tab: AdminTab,
    /// Text typed after `:`; `None` while the palette is closed
    pub palette: Option<String>,
    pub show_help: bool,
    pub status: Option<StatusMessage>,
}

impl UiState {
    pub fn new(sort: SortOrder) -> Self {
        Self {
            running: true,
            focus: Focus::default(),
            filter: CategoryFilter::default(),
            sort,
            catalog_selected: 0,
            cart_selected: 0,
            admin_selected: 0,
            admin_tab: AdminTab::default(),
            palette: None,
            show_help: false,
            status: None,
        }
    }

    pub fn palette_open(&self) -> bool {
        self.palette.is_some()
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(SortOrder::default())
    }
}

/// A stored selection clamped to a table of `len` rows
pub fn clamp_selection(selected: usize, len: usize) -> Option<usize> {
    match len {
        0 => None,
        len => Some(selected.min(len - 1)),
    }
}
