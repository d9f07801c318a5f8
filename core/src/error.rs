use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board dimensions must be at least 1x1")]
    InvalidConfiguration,
    #[error("Too many mines")]
    TooManyMines,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Mines were already placed on this board")]
    MinesAlreadyPlaced,
    #[error("Mines must be placed before any tile is revealed")]
    BoardAlreadyPlayed,
}

pub type Result<T> = core::result::Result<T, GameError>;
