//! Pattern scores for Gomoku evaluation
//!
//! The evaluator scores 5-cell windows. A window is only worth something
//! while it can still become five in a row, so any opposing stone in it
//! zeroes the score. Off-board cells count as neither own nor empty.

use crate::board::Stone;

/// Window scores, keyed by how many of the player's stones it holds
pub struct PatternScore;

impl PatternScore {
    /// Five in a row
    pub const FIVE: i64 = 1_000_000;
    /// Live four: four stones and one empty cell
    pub const LIVE_FOUR: i64 = 50_000;
    /// Live three: three stones and two empty cells
    pub const LIVE_THREE: i64 = 1_000;
    /// Live two: two stones and three empty cells
    pub const LIVE_TWO: i64 = 100;
    /// Live one: a lone stone in an otherwise empty window
    pub const LIVE_ONE: i64 = 10;
}

/// Length of a scoring window
pub const WINDOW_LEN: usize = 5;

/// Cell tallies for one window, from one player's perspective
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowCounts {
    pub own: u8,
    pub opponent: u8,
    pub empty: u8,
}

impl WindowCounts {
    /// Classify a window. `None` marks an off-board cell.
    pub fn classify(window: &[Option<Stone>], player: Stone) -> Self {
        let opponent = player.opponent();
        let mut counts = Self::default();
        for cell in window {
            match cell {
                Some(s) if *s == player => counts.own += 1,
                Some(s) if *s == opponent => counts.opponent += 1,
                Some(_) => counts.empty += 1,
                None => {}
            }
        }
        counts
    }

    /// Score of this window for the player it was classified for
    pub fn score(self) -> i64 {
        if self.opponent > 0 {
            return 0;
        }
        match (self.own, self.empty) {
            (5, _) => PatternScore::FIVE,
            (4, 1) => PatternScore::LIVE_FOUR,
            (3, 2) => PatternScore::LIVE_THREE,
            (2, 3) => PatternScore::LIVE_TWO,
            (1, 4) => PatternScore::LIVE_ONE,
            _ => 0,
        }
    }
}

/// Score a single window for `player`
#[inline]
pub fn score_window(window: &[Option<Stone>], player: Stone) -> i64 {
    WindowCounts::classify(window, player).score()
}
