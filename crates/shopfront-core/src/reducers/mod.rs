//! Reducers
//!
//! Pure functions that produce the next state from the current state and an action.

pub mod app_reducer;
pub mod cart_reducer;
pub mod navigation_reducer;

pub use app_reducer::{apply, reduce};
