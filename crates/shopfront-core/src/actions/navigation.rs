//! Navigation actions
//!
//! The view and the page are independent; setting one never touches the other.

use crate::domain_models::{Page, TopLevelView};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    SetView(TopLevelView),
    SetPage(Page),
}
