//! Turn controller for Gomoku games
//!
//! [`Game`] owns the board and sequences human and automated turns.
//! Automated turns are delayed by a timer that the embedding layer
//! advances with [`Game::tick`], so the controller itself never sleeps
//! or spawns threads.

pub mod controller;
pub mod timer;

pub use controller::Game;
pub use timer::{TimerKind, TurnTimer};

use crate::board::Stone;

/// Who controls each color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameMode {
    /// Both colors entered by humans (hotseat)
    HumanVsHuman,
    /// Human plays `human`, the engine plays the other color
    HumanVsAi { human: Stone },
    /// Engine plays both colors on a fixed cadence (exhibition)
    AiVsAi,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::HumanVsAi { human: Stone::Black }
    }
}

impl GameMode {
    /// Whether the engine moves for `color` in this mode
    pub fn is_automated(self, color: Stone) -> bool {
        match self {
            GameMode::HumanVsHuman => false,
            GameMode::HumanVsAi { human } => color != human,
            GameMode::AiVsAi => true,
        }
    }
}

/// Game result so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Win(Stone),
    Draw,
}

impl Outcome {
    #[inline]
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }
}

/// Controller state as seen by a rendering layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for a human to place a stone of this color
    AwaitingHumanMove(Stone),
    /// The engine will move for this color once the delay runs out
    AutomatedTurn(Stone),
    /// Exhibition timer running, this color moves next
    ExhibitionRunning(Stone),
    /// Exhibition stopped before the game finished
    Paused(Stone),
    GameOver(Outcome),
}
