//! Game rules for freestyle Gomoku
//!
//! Five or more in a row wins; there are no captures and no forbidden
//! moves. A full board with no winner is a draw.

pub mod win;

// Re-exports for convenient access
pub use win::{check_win, is_draw, run_length, winning_line, DIRECTIONS, WIN_LENGTH};
