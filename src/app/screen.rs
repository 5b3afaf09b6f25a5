// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::ui::navbar::Section;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Talks,
    Contact,
}

impl From<Section> for Screen {
    fn from(section: Section) -> Self {
        match section {
            Section::Talks => Screen::Talks,
            Section::Contact => Screen::Contact,
        }
    }
}

impl Screen {
    /// Navbar entry highlighted while this screen is shown.
    #[must_use]
    pub fn section(self) -> Section {
        match self {
            Screen::Talks => Section::Talks,
            Screen::Contact => Section::Contact,
        }
    }
}
