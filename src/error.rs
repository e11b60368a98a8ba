//! Error types for move submission and game setup
//!
//! Nothing here is fatal. A rejected move leaves the game untouched and
//! the caller can simply try again.

use crate::board::{Stone, MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Why a submitted move was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    /// Coordinates outside the board
    #[error("move ({row}, {col}) is outside the {size}x{size} board")]
    OutOfBounds { row: usize, col: usize, size: usize },

    /// Target cell already holds a stone
    #[error("cell ({row}, {col}) is already occupied")]
    Occupied { row: usize, col: usize },

    /// Submitted by the wrong side, e.g. a human move during an automated turn
    #[error("not your turn: {to_move} is to move")]
    NotYourTurn { to_move: Stone },

    /// The game has already finished
    #[error("game is over")]
    GameOver,
}

/// Errors from starting or configuring a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error(
        "board size {size} outside supported range {}..={}",
        MIN_BOARD_SIZE,
        MAX_BOARD_SIZE
    )]
    InvalidBoardSize { size: usize },

    /// Side to move must be Black or White
    #[error("{stone} cannot be the side to move")]
    InvalidPlayer { stone: Stone },
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
