//! Main AI Engine wrapping the move search
//!
//! The engine owns the searcher (and through it the tie-break random
//! source), runs it on a scratch copy of the caller's board and reports
//! the chosen move with timing statistics.
//!
//! Move priority:
//!
//! 1. **Immediate win**: a stone that completes five for the mover
//! 2. **Block**: a cell where the opponent would complete five
//! 3. **Heuristic**: best pattern-evaluation difference
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Pos, Stone};
//!
//! let mut engine = AIEngine::with_seed(3);
//! let mut board = Board::new(15);
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = engine.get_move_with_stats(&board, Stone::White);
//! println!("Best move: {:?}", result.best_move);
//! println!("Search type: {:?}", result.search_type);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::board::{Board, Pos, Stone};
use crate::search::{SearchResult, SearchType, Searcher};

/// Result of a move search with timing statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Best move found, `None` only when the board is full
    pub best_move: Option<Pos>,
    /// Score of the chosen move
    pub score: i64,
    /// Priority class of the chosen move
    pub search_type: SearchType,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Number of candidate cells examined
    pub candidates: usize,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: Some(result.best_move),
            score: result.score,
            search_type: result.search_type,
            time_ms,
            candidates: result.candidates,
        }
    }

    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            search_type: SearchType::Heuristic,
            time_ms,
            candidates: 0,
        }
    }
}

/// Main AI Engine for Gomoku.
///
/// Generic over the random source used for tie-breaks. The default,
/// [`ChaCha8Rng`], can be seeded for reproducible games.
#[derive(Debug, Clone)]
pub struct AIEngine<R = ChaCha8Rng> {
    searcher: Searcher<R>,
}

impl AIEngine<ChaCha8Rng> {
    /// Create an engine seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(ChaCha8Rng::from_entropy())
    }

    /// Create an engine with a fixed seed. Same seed, same board, same move.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is given, entropy otherwise
    #[must_use]
    pub fn from_seed_option(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::new, Self::with_seed)
    }
}

impl Default for AIEngine<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AIEngine<R> {
    /// Create an engine around any random source
    pub fn with_rng(rng: R) -> Self {
        Self {
            searcher: Searcher::new(rng),
        }
    }

    /// Get the best move for the given position.
    ///
    /// Returns `None` if the board is full.
    #[must_use]
    pub fn get_move(&mut self, board: &Board, color: Stone) -> Option<Pos> {
        self.get_move_with_stats(board, color).best_move
    }

    /// Get the best move with search statistics.
    ///
    /// The caller's board is never touched. The search runs on a scratch
    /// copy.
    #[must_use]
    pub fn get_move_with_stats(&mut self, board: &Board, color: Stone) -> MoveResult {
        let start = Instant::now();
        let mut scratch = board.clone();
        let found = self.searcher.find_best_move(&mut scratch, color);
        let time_ms = start.elapsed().as_millis() as u64;

        match found {
            Some(result) => {
                debug!(
                    mover = %color,
                    best = %result.best_move,
                    score = result.score,
                    kind = ?result.search_type,
                    candidates = result.candidates,
                    time_ms,
                    "search complete"
                );
                MoveResult::from_search(result, time_ms)
            }
            None => {
                debug!(mover = %color, "search found no empty cell");
                MoveResult::no_move(time_ms)
            }
        }
    }
}
