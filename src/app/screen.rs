// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Catalog,
    Tokens,
    About,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Catalog, Screen::Tokens, Screen::About];

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Screen::Catalog => "navbar-catalog",
            Screen::Tokens => "navbar-tokens",
            Screen::About => "navbar-about",
        }
    }
}
