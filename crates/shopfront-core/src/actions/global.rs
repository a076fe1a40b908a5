//! Global actions

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalAction {
    /// Set the advisory loading flag
    SetLoading(bool),
}
