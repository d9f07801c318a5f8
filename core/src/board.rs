use alloc::collections::VecDeque;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// A single game, from empty grid to terminal status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    size: Coord2,
    grid: Array2<Tile>,
    mine_count: CellCount,
    mines_placed: bool,
    exposed_count: CellCount,
    status: GameStatus,
    triggered_mine: Option<Coord2>,
}

impl Board {
    pub fn new(width: Coord, height: Coord) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(GameError::InvalidConfiguration);
        }

        let size = (width, height);
        log::debug!("New board {}x{}", width, height);
        Ok(Self {
            size,
            grid: Array2::default(size.to_nd_index()),
            mine_count: 0,
            mines_placed: false,
            exposed_count: 0,
            status: GameStatus::default(),
            triggered_mine: None,
        })
    }

    /// Creates a board and places mines in one go, the "start new game" trigger.
    pub fn with_generator(config: GameConfig, generator: impl MineGenerator) -> Result<Self> {
        let mut board = Self::new(config.size.0, config.size.1)?;
        board.place_mines(config.mines, generator)?;
        Ok(board)
    }

    /// Places exactly `mine_count` mines, chosen by `generator`. Allowed once per board, before any reveal.
    pub fn place_mines(&mut self, mine_count: CellCount, generator: impl MineGenerator) -> Result<()> {
        self.check_mines_not_placed()?;
        let config = GameConfig::new(self.size, mine_count)?;
        let layout = generator.generate(config);
        self.place_mine_layout(&layout)
    }

    /// Rejection-sampled placement seeded from `seed`.
    pub fn place_random_mines(&mut self, mine_count: CellCount, seed: u64) -> Result<()> {
        self.place_mines(mine_count, RejectionSampler::new(seed))
    }

    /// Places the mines of an explicit layout. Allowed once per board, before any reveal.
    pub fn place_mine_layout(&mut self, layout: &MineLayout) -> Result<()> {
        self.check_mines_not_placed()?;
        if layout.size() != self.size {
            return Err(GameError::InvalidBoardShape);
        }
        if layout.mine_count() >= self.total_cells() {
            return Err(GameError::TooManyMines);
        }

        for coords in layout.mine_positions() {
            self.grid[coords.to_nd_index()].value = TileValue::Mine;
        }
        self.mine_count = layout.mine_count();
        self.mines_placed = true;
        log::debug!("Placed {} mines", self.mine_count);

        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_won(&self) -> bool {
        matches!(self.status, GameStatus::Won)
    }

    pub fn is_lost(&self) -> bool {
        matches!(self.status, GameStatus::Lost)
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn width(&self) -> Coord {
        self.size.0
    }

    pub fn height(&self) -> Coord {
        self.size.1
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn safe_tile_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn exposed_count(&self) -> CellCount {
        self.exposed_count
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size, self.mine_count)
    }

    pub fn tile_at(&self, coords: Coord2) -> Result<Tile> {
        let coords = self.validate_coords(coords)?;
        Ok(self.grid[coords.to_nd_index()])
    }

    pub fn view_at(&self, coords: Coord2) -> Result<TileView> {
        self.tile_at(coords).map(Tile::view)
    }

    pub fn mine_positions(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.grid
            .indexed_iter()
            .filter(|(_, tile)| tile.is_mine())
            .map(|((x, y), _)| (x as Coord, y as Coord))
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Number of mines among the in-bounds neighbors of `coords`.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        self.iter_neighbors(coords)
            .filter(|&pos| self.grid[pos.to_nd_index()].is_mine())
            .count() as u8
    }

    /// Reveals a tile, flood-filling through zero-count regions.
    ///
    /// Already revealed tiles and finished games are left untouched and report
    /// [`RevealOutcome::NoChange`].
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;

        if self.status.is_finished() || !self.grid[coords.to_nd_index()].hidden {
            return Ok(RevealOutcome::NoChange);
        }

        if self.grid[coords.to_nd_index()].is_mine() {
            self.grid[coords.to_nd_index()].hidden = false;
            self.triggered_mine = Some(coords);
            self.status = GameStatus::Lost;
            log::debug!("Hit mine at {:?}", coords);
            return Ok(RevealOutcome::HitMine);
        }

        let newly_exposed = self.flood_fill(coords);
        log::debug!("Revealed {:?}, exposed {} tiles", coords, newly_exposed);

        if self.exposed_count == self.safe_tile_count() {
            self.status = GameStatus::Won;
            log::debug!("All {} safe tiles exposed, game won", self.exposed_count);
            Ok(RevealOutcome::Won)
        } else {
            Ok(RevealOutcome::Revealed)
        }
    }

    /// Discloses every mine, for display after a loss. Returns how many were newly shown.
    pub fn reveal_all_mines(&mut self) -> CellCount {
        let mut disclosed = 0;
        for tile in self.grid.iter_mut().filter(|tile| tile.is_mine()) {
            if tile.hidden {
                tile.hidden = false;
                disclosed += 1;
            }
        }
        disclosed
    }

    fn flood_fill(&mut self, start: Coord2) -> CellCount {
        let mut newly_exposed = 0;
        let mut to_visit = VecDeque::from([start]);

        while let Some(visit_coords) = to_visit.pop_front() {
            // duplicates can be queued before they get processed
            if !self.grid[visit_coords.to_nd_index()].hidden {
                continue;
            }

            let adjacent_mines = self.adjacent_mine_count(visit_coords);
            let tile = &mut self.grid[visit_coords.to_nd_index()];
            tile.value = TileValue::MineCount(adjacent_mines);
            tile.hidden = false;
            self.exposed_count += 1;
            newly_exposed += 1;
            log::trace!(
                "Flood opened tile at {:?}, mine count: {}",
                visit_coords,
                adjacent_mines
            );

            if adjacent_mines == 0 {
                let grid = &self.grid;
                to_visit.extend(
                    NeighborIter::new(visit_coords, self.size)
                        .filter(|&pos| grid[pos.to_nd_index()].hidden),
                );
            }
        }

        newly_exposed
    }

    fn check_mines_not_placed(&self) -> Result<()> {
        if self.mines_placed {
            Err(GameError::MinesAlreadyPlaced)
        } else if self.exposed_count > 0 || self.status.is_finished() {
            Err(GameError::BoardAlreadyPlayed)
        } else {
            Ok(())
        }
    }

    fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size)
    }
}
