use serde::{Deserialize, Serialize};

/// What lies under a tile. `MineCount` is only filled in when the tile gets revealed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileValue {
    #[default]
    Empty,
    MineCount(u8),
    Mine,
}

impl TileValue {
    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub value: TileValue,
    pub hidden: bool,
}

impl Tile {
    pub const fn is_mine(self) -> bool {
        self.value.is_mine()
    }

    /// Revealed and not a mine.
    pub const fn is_exposed(self) -> bool {
        !self.hidden && !self.value.is_mine()
    }

    pub const fn view(self) -> TileView {
        match (self.hidden, self.value) {
            (true, _) => TileView::Hidden,
            (false, TileValue::Mine) => TileView::Mine,
            (false, TileValue::MineCount(count)) => TileView::Count(count),
            // a revealed tile always has its count computed
            (false, TileValue::Empty) => TileView::Hidden,
        }
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self {
            value: TileValue::Empty,
            hidden: true,
        }
    }
}

/// Player-visible state of a single tile.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileView {
    #[default]
    Hidden,
    Count(u8),
    Mine,
}

impl TileView {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}
