//! Game configuration

use std::time::Duration;

use crate::board::DEFAULT_BOARD_SIZE;

/// Delay before an automated move is applied, so a human can follow it
pub const DEFAULT_AI_DELAY: Duration = Duration::from_millis(500);

/// Interval between plies in automated-vs-automated play
pub const DEFAULT_EXHIBITION_CADENCE: Duration = Duration::from_millis(500);

/// Settings for a [`Game`](crate::game::Game).
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use gomoku::GameConfig;
///
/// let config = GameConfig::default()
///     .with_board_size(9)
///     .with_ai_delay(Duration::ZERO)
///     .with_seed(7);
/// assert_eq!(config.board_size, 9);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Side of the square board
    pub board_size: usize,
    /// Wait before an automated move in human-vs-automated play
    pub ai_delay: Duration,
    /// Wait between plies in automated-vs-automated play
    pub exhibition_cadence: Duration,
    /// Seed for tie-break shuffling. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            ai_delay: DEFAULT_AI_DELAY,
            exhibition_cadence: DEFAULT_EXHIBITION_CADENCE,
            seed: None,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_board_size(mut self, board_size: usize) -> Self {
        self.board_size = board_size;
        self
    }

    #[must_use]
    pub fn with_ai_delay(mut self, delay: Duration) -> Self {
        self.ai_delay = delay;
        self
    }

    #[must_use]
    pub fn with_exhibition_cadence(mut self, cadence: Duration) -> Self {
        self.exhibition_cadence = cadence;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
