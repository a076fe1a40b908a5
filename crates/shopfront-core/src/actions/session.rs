//! Session actions

use crate::domain_models::Session;

#[derive(Debug, Clone)]
pub enum SessionAction {
    /// Replace the session wholesale: `Some` signs in, `None` signs out
    Set(Option<Session>),
}
