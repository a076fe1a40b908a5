use crate::actions::NavigationAction;
use crate::state::NavigationState;

/// Reducer for view/page routing
pub fn reduce(mut state: NavigationState, action: &NavigationAction) -> NavigationState {
    match action {
        NavigationAction::SetView(view) => {
            log::debug!("View: {} -> {}", state.view, view);
            state.view = *view;
        }
        NavigationAction::SetPage(page) => {
            log::debug!("Page: {} -> {}", state.page, page);
            state.page = *page;
        }
    }
    state
}
