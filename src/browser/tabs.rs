//! Static tab table: each tab pairs a fixed root directory with an extension
//! filter.

use super::kind::KnownKind;

/// Device path of the favorites directory.
pub const FAVORITES_PATH: &str = "/any/favorites";

/// Filter value that accepts every entry.
pub const WILDCARD: &str = "*";

/// One of the browser's tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Favorites,
    IButton,
    Nfc,
    SubGhz,
    LfRfid,
    Infrared,
    Browser,
}

impl Tab {
    /// All tabs in display order.
    pub const ALL: [Tab; 7] = [
        Tab::Favorites,
        Tab::IButton,
        Tab::Nfc,
        Tab::SubGhz,
        Tab::LfRfid,
        Tab::Infrared,
        Tab::Browser,
    ];

    /// Look a tab up by its position in `ALL`.
    pub fn from_index(index: usize) -> Option<Tab> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Parse a tab from its config/CLI name.
    pub fn from_name(name: &str) -> Option<Tab> {
        Self::ALL
            .iter()
            .copied()
            .find(|tab| tab.label().eq_ignore_ascii_case(name))
    }

    /// Fixed root directory of this tab.
    pub fn root(self) -> &'static str {
        match self.known_kind() {
            Some(kind) => kind.default_root(),
            None => match self {
                Tab::Favorites => FAVORITES_PATH,
                _ => "/any",
            },
        }
    }

    /// Extension filter of this tab; `WILDCARD` accepts everything.
    pub fn filter(self) -> &'static str {
        match self.known_kind() {
            Some(kind) => kind.extension(),
            None => WILDCARD,
        }
    }

    /// The file kind this tab is dedicated to, if any.
    pub fn known_kind(self) -> Option<KnownKind> {
        match self {
            Tab::IButton => Some(KnownKind::IButton),
            Tab::Nfc => Some(KnownKind::Nfc),
            Tab::SubGhz => Some(KnownKind::SubGhz),
            Tab::LfRfid => Some(KnownKind::LfRfid),
            Tab::Infrared => Some(KnownKind::Infrared),
            Tab::Favorites | Tab::Browser => None,
        }
    }

    /// Short display label.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Favorites => "Favorites",
            Tab::IButton => "iButton",
            Tab::Nfc => "NFC",
            Tab::SubGhz => "SubGhz",
            Tab::LfRfid => "RFID",
            Tab::Infrared => "Infrared",
            Tab::Browser => "Browser",
        }
    }

    /// Tab to the left, or `None` at the first tab.
    pub fn previous(self) -> Option<Tab> {
        self.index().checked_sub(1).and_then(Tab::from_index)
    }

    /// Tab to the right, or `None` at the last tab.
    pub fn next(self) -> Option<Tab> {
        Tab::from_index(self.index() + 1)
    }
}
