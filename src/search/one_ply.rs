//! One-ply heuristic move search
//!
//! Every empty cell is a candidate. Each candidate is scored by playing
//! it for the mover and taking the evaluation difference between the
//! mover and the opponent, with bonuses when the stone wins on the spot
//! or when the opponent would win by playing the same cell. There is no
//! lookahead past that immediate reply check.
//!
//! Candidates are visited in a shuffled order so that equally scored
//! moves are picked at random. The random source is owned by the
//! [`Searcher`], so tests can hand it a seeded generator.
//!
//! # Example
//!
//! ```
//! use gomoku::board::{Board, Stone};
//! use gomoku::search::Searcher;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut searcher = Searcher::new(ChaCha8Rng::seed_from_u64(1));
//! let mut board = Board::new(9);
//!
//! let result = searcher.find_best_move(&mut board, Stone::Black);
//! assert!(result.is_some());
//! ```

use rand::seq::SliceRandom;
use rand::Rng;

use crate::board::{Board, Pos, Stone};
use crate::eval::evaluate;
use crate::rules::check_win;

/// Added when the candidate completes five for the mover
pub const WIN_BONUS: i64 = 100_000;

/// Added when the opponent would complete five on the candidate cell
pub const BLOCK_BONUS: i64 = 50_000;

/// Why a move was chosen. Variants are ordered by selection priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SearchType {
    /// Best evaluation difference, no tactical reason
    Heuristic,
    /// Occupies a cell where the opponent would complete five
    Block,
    /// Completes five for the mover
    ImmediateWin,
}

/// Outcome of a single search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Chosen move
    pub best_move: Pos,
    /// Score of the chosen move, bonuses included
    pub score: i64,
    /// Priority class of the chosen move
    pub search_type: SearchType,
    /// Number of candidates examined
    pub candidates: usize,
}

/// One-ply searcher with an injectable random source for tie-breaks
#[derive(Debug, Clone)]
pub struct Searcher<R> {
    rng: R,
}

impl<R: Rng> Searcher<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Pick a move for `mover`, or `None` when the board is full.
    ///
    /// Candidates are ranked by `(search_type, score)`. A winning move
    /// always outranks a block, and a block always outranks a quiet move,
    /// whatever the evaluation says. The first candidate in shuffled order
    /// wins a tie.
    ///
    /// The board is used as scratch space. Every simulated stone is
    /// removed again before the call returns.
    pub fn find_best_move(&mut self, board: &mut Board, mover: Stone) -> Option<SearchResult> {
        let mut candidates: Vec<Pos> = board.empty_cells().collect();
        candidates.shuffle(&mut self.rng);

        let mut best: Option<SearchResult> = None;
        for &pos in &candidates {
            let (score, search_type) = score_candidate(board, pos, mover);
            let improves = best
                .as_ref()
                .map_or(true, |b| (search_type, score) > (b.search_type, b.score));
            if improves {
                best = Some(SearchResult {
                    best_move: pos,
                    score,
                    search_type,
                    candidates: candidates.len(),
                });
            }
        }
        best
    }
}

/// Score a single empty cell for `mover`.
///
/// Plays the mover's stone, measures `evaluate(mover) - evaluate(opponent)`
/// and adds [`WIN_BONUS`] if that stone wins. Then plays the opponent's
/// stone on the same cell and adds [`BLOCK_BONUS`] if that would win.
/// Both stones are removed before returning.
pub fn score_candidate(board: &mut Board, pos: Pos, mover: Stone) -> (i64, SearchType) {
    let opponent = mover.opponent();

    board.place_stone(pos, mover);
    let mut score = evaluate(board, mover) - evaluate(board, opponent);
    let wins = check_win(board, pos);
    board.remove_stone(pos);
    if wins {
        score += WIN_BONUS;
    }

    board.place_stone(pos, opponent);
    let blocks = check_win(board, pos);
    board.remove_stone(pos);
    if blocks {
        score += BLOCK_BONUS;
    }

    let search_type = if wins {
        SearchType::ImmediateWin
    } else if blocks {
        SearchType::Block
    } else {
        SearchType::Heuristic
    };
    (score, search_type)
}
