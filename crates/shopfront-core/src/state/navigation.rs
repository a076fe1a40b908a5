use crate::domain_models::{Page, TopLevelView};

/// Routing state: two independent fields, starts at (store, home)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    pub view: TopLevelView,
    pub page: Page,
}
