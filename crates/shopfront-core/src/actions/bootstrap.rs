//! Bootstrap actions
//!
//! Actions for store initialization.

/// Actions for store bootstrap
#[derive(Debug, Clone)]
pub enum BootstrapAction {
    /// Load the catalog seed and hand it to the store
    Start,
    /// Seed applied; the store is ready for the presentation layer
    End,
}
