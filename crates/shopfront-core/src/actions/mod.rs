//! Actions module
//!
//! Every state change goes through one of these values. Actions are tagged by
//! the slice of state they affect; bootstrap actions are side-effect triggers
//! handled by middleware and never reach the reducer.

pub mod bootstrap;
pub mod cart;
pub mod catalog;
pub mod global;
pub mod navigation;
pub mod orders;
pub mod session;

pub use bootstrap::BootstrapAction;
pub use cart::CartAction;
pub use catalog::CatalogAction;
pub use global::GlobalAction;
pub use navigation::NavigationAction;
pub use orders::OrderAction;
pub use session::SessionAction;

/// Root action enum - tagged by domain
#[derive(Debug, Clone)]
pub enum Action {
    /// Catalog replacement
    Catalog(CatalogAction),
    /// Shopping cart edits
    Cart(CartAction),
    /// Sign in / sign out
    Session(SessionAction),
    /// Order history replacement
    Orders(OrderAction),
    /// View and page routing
    Navigation(NavigationAction),
    /// Application-wide flags
    Global(GlobalAction),
    /// Startup sequence
    Bootstrap(BootstrapAction),

    /// No-op action
    None,
}

impl Action {
    /// Short tag for log lines, without the payload
    pub fn name(&self) -> &'static str {
        match self {
            Action::Catalog(CatalogAction::Set(_)) => "Catalog::Set",
            Action::Cart(CartAction::Add { .. }) => "Cart::Add",
            Action::Cart(CartAction::Update { .. }) => "Cart::Update",
            Action::Cart(CartAction::Remove(_)) => "Cart::Remove",
            Action::Cart(CartAction::Clear) => "Cart::Clear",
            Action::Session(SessionAction::Set(_)) => "Session::Set",
            Action::Orders(OrderAction::Set(_)) => "Orders::Set",
            Action::Navigation(NavigationAction::SetView(_)) => "Navigation::SetView",
            Action::Navigation(NavigationAction::SetPage(_)) => "Navigation::SetPage",
            Action::Global(GlobalAction::SetLoading(_)) => "Global::SetLoading",
            Action::Bootstrap(BootstrapAction::Start) => "Bootstrap::Start",
            Action::Bootstrap(BootstrapAction::End) => "Bootstrap::End",
            Action::None => "None",
        }
    }
}
