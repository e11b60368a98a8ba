//! Gomoku move-selection engine and turn controller
//!
//! A freestyle Gomoku (five-in-a-row) engine for an embedding UI:
//! - Square board, 15x15 by default
//! - Five or more in a row wins (overlines allowed)
//! - Full board with no winner is a draw
//! - Black moves first
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation
//! - [`rules`]: Win and draw detection
//! - [`eval`]: Window-based pattern evaluation
//! - [`search`]: One-ply move search with win/block detection
//! - [`engine`]: AI engine wrapping the search with statistics
//! - [`game`]: Turn controller, automated turns and exhibition mode
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, Stone};
//!
//! let mut board = Board::new(15);
//! let mut engine = AIEngine::with_seed(42);
//!
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! // AI responds as White
//! if let Some(pos) = engine.get_move(&board, Stone::White) {
//!     board.place_stone(pos, Stone::White);
//!     println!("AI plays at {pos}");
//! }
//! ```
//!
//! # Search Priority
//!
//! 1. Immediate winning move
//! 2. Block the opponent's immediate win
//! 3. Best pattern-evaluation difference, ties broken at random

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, DEFAULT_BOARD_SIZE};
pub use config::GameConfig;
pub use engine::{AIEngine, MoveResult};
pub use error::{GameError, MoveError};
pub use game::{Game, GameMode, Outcome, Phase};
pub use search::SearchType;
