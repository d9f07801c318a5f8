use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Everything a front-end needs to draw a board, without leaking hidden mines.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub mine_count: CellCount,
    pub status: GameStatus,
    pub exposed_count: CellCount,
    pub triggered_mine: Option<Coord2>,
    pub tiles: Array2<TileView>,
}

impl Snapshot {
    pub fn from_board(board: &Board) -> Self {
        let size = board.size();
        let mut tiles = Array2::from_elem(size.to_nd_index(), TileView::Hidden);

        for ((x, y), view) in tiles.indexed_iter_mut() {
            if let Ok(tile) = board.tile_at((x as Coord, y as Coord)) {
                *view = tile.view();
            }
        }

        Self {
            size,
            mine_count: board.mine_count(),
            status: board.status(),
            exposed_count: board.exposed_count(),
            triggered_mine: board.triggered_mine(),
            tiles,
        }
    }

    pub fn view_at(&self, coords: Coord2) -> Option<TileView> {
        in_bounds(coords, self.size).then(|| self.tiles[coords.to_nd_index()])
    }

    pub fn validate(&self) -> Result<()> {
        let expected = (usize::from(self.size.0), usize::from(self.size.1));
        if self.tiles.dim() != expected {
            return Err(GameError::InvalidBoardShape);
        }

        if self.mine_count >= mult(self.size.0, self.size.1) {
            return Err(GameError::TooManyMines);
        }

        Ok(())
    }
}
