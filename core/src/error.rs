use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board must have at least one row and one column")]
    InvalidSize,
    #[error("Too many mines and treasures, requested {requested} but the board only has {capacity} cells")]
    TooManyItems {
        requested: CellCount,
        capacity: CellCount,
    },
    #[error("Too many treasure kinds")]
    TooManyTreasureKinds,
    #[error("Unknown treasure kind")]
    UnknownTreasure,
    #[error("Cell already occupied")]
    CellOccupied,
    #[error("A game needs at least one life")]
    InvalidLives,
    #[error("Board does not match the expected size")]
    BoardMismatch,
    #[error("Game is still in progress")]
    NotFinished,
    #[error("Score was already claimed")]
    AlreadyClaimed,
}

pub type Result<T> = core::result::Result<T, GameError>;
