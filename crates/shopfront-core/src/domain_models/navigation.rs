//! Navigation values
//!
//! The two orthogonal routing fields managed by the store.

use strum::{Display, EnumString};

/// Top-level surface the presentation layer renders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TopLevelView {
    #[default]
    Store,
    Admin,
}

/// Sub-page inside the storefront
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Page {
    #[default]
    Home,
    Profile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(TopLevelView::default(), TopLevelView::Store);
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_parse() {
        assert_eq!("admin".parse::<TopLevelView>().unwrap(), TopLevelView::Admin);
        assert_eq!("PROFILE".parse::<Page>().unwrap(), Page::Profile);
        assert!("checkout".parse::<Page>().is_err());
    }
}
