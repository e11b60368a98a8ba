//! Evaluation module for Gomoku positions
//!
//! This module provides window-based pattern scoring for board positions:
//! - Window classification (own / opponent / empty cells)
//! - Live-pattern weights (ones through fives)
//! - Whole-board aggregation over every empty cell

pub mod heuristic;
pub mod patterns;

pub use heuristic::{evaluate, evaluate_cell};
pub use patterns::{score_window, PatternScore, WindowCounts};
