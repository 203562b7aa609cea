//! File Menu State Machine: the per-entry action menu.

/// Number of menu items.
pub const MENU_ITEM_COUNT: usize = 4;

/// Items in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Open,
    Favorite,
    Rename,
    Delete,
}

impl MenuItem {
    pub const ALL: [MenuItem; MENU_ITEM_COUNT] = [
        MenuItem::Open,
        MenuItem::Favorite,
        MenuItem::Rename,
        MenuItem::Delete,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Label shown in the menu. The favorite item reflects the snapshot taken
    /// when the menu was opened.
    pub fn label(self, favorite: bool) -> &'static str {
        match self {
            MenuItem::Open => "Run in app",
            MenuItem::Favorite if favorite => "Unpin",
            MenuItem::Favorite => "Pin",
            MenuItem::Rename => "Rename",
            MenuItem::Delete => "Delete",
        }
    }
}

/// Direction of a menu or list move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Menu state. The index only exists while the menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open {
        index: usize,
        /// Favorite status of the entry when the menu was opened.
        favorite: bool,
    },
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        matches!(self, MenuState::Open { .. })
    }

    /// Open at the first item. No-op if already open.
    pub fn open(&mut self, favorite: bool) {
        if !self.is_open() {
            *self = MenuState::Open { index: 0, favorite };
        }
    }

    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    /// Cycle the highlighted item, wrapping in both directions.
    pub fn step(&mut self, direction: Direction) {
        if let MenuState::Open { index, .. } = self {
            *index = match direction {
                Direction::Up => (*index + MENU_ITEM_COUNT - 1) % MENU_ITEM_COUNT,
                Direction::Down => (*index + 1) % MENU_ITEM_COUNT,
            };
        }
    }

    /// Highlighted index, if open.
    pub fn index(&self) -> Option<usize> {
        match self {
            MenuState::Open { index, .. } => Some(*index),
            MenuState::Closed => None,
        }
    }
}
