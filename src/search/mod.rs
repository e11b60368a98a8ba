//! Search module for Gomoku AI
//!
//! Contains the one-ply heuristic searcher: immediate win and block
//! detection layered over the pattern evaluator, with randomized
//! tie-breaking.

pub mod one_ply;

pub use one_ply::{score_candidate, SearchResult, SearchType, Searcher, BLOCK_BONUS, WIN_BONUS};
