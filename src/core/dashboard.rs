//! Dashboard command vocabulary and tile selection
//!
//! The tile menu is a static table mapping commands to labels, so handlers
//! can be enumerated and exercised without a live display. Selection is a
//! clamped index: no wraparound at either end.

/// A command bound to one dashboard tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileCommand {
    Games,
    Music,
    Shop,
    Settings,
    CodingApp,
    Shutdown,
}

impl TileCommand {
    /// Title and message for the commands that open an informational
    /// dialog. `None` for commands with their own window or effect.
    pub fn dialog_content(self) -> Option<(&'static str, &'static str)> {
        match self {
            TileCommand::Games => Some(("Games", "Launching games...")),
            TileCommand::Music => Some(("Music", "Opening music library...")),
            TileCommand::Shop => Some(("Shop", "Welcome to the store!")),
            TileCommand::Settings => Some(("Settings", "Settings panel opened.")),
            TileCommand::CodingApp | TileCommand::Shutdown => None,
        }
    }
}

/// One dashboard menu entry
#[derive(Debug, Clone, Copy)]
pub struct Tile {
    pub label: &'static str,
    pub command: TileCommand,
}

/// The tile row, in activation order
pub const TILES: [Tile; 6] = [
    Tile {
        label: "Games",
        command: TileCommand::Games,
    },
    Tile {
        label: "Music",
        command: TileCommand::Music,
    },
    Tile {
        label: "Shop",
        command: TileCommand::Shop,
    },
    Tile {
        label: "Settings",
        command: TileCommand::Settings,
    },
    Tile {
        label: "Coding App",
        command: TileCommand::CodingApp,
    },
    Tile {
        label: "Shutdown",
        command: TileCommand::Shutdown,
    },
];

/// Inert labels along the top navigation bar
pub const NAV_ITEMS: [&str; 8] = [
    "Bing",
    "Home",
    "Social",
    "Games",
    "TV & Movies",
    "Music",
    "Apps",
    "Settings",
];

/// Which tile is currently highlighted. Always in `[0, TILES.len())`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSelection {
    index: usize,
}

impl TileSelection {
    pub fn new() -> Self {
        Self { index: 0 }
    }

    pub fn index(self) -> usize {
        self.index
    }

    pub fn command(self) -> TileCommand {
        TILES[self.index].command
    }

    /// Move one tile left; no-op at the first tile.
    pub fn move_left(&mut self) {
        if self.index > 0 {
            self.index -= 1;
        }
    }

    /// Move one tile right; no-op at the last tile.
    pub fn move_right(&mut self) {
        if self.index + 1 < TILES.len() {
            self.index += 1;
        }
    }

    /// Jump directly to a tile (mouse). Out-of-range indices are ignored.
    pub fn set(&mut self, index: usize) {
        if index < TILES.len() {
            self.index = index;
        }
    }
}

impl Default for TileSelection {
    fn default() -> Self {
        Self::new()
    }
}
