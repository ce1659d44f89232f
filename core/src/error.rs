use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates outside the board")]
    InvalidCoords,
    #[error("Too many mines for the board size")]
    TooManyMines,
}

pub type Result<T> = core::result::Result<T, GameError>;
