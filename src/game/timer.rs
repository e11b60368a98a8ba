//! Countdown timer for automated turns

use std::time::Duration;

/// Whether the timer fires once or keeps re-arming
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// A single delayed automated move
    OneShot,
    /// Exhibition cadence
    Repeating(Duration),
}

/// Countdown driven by elapsed time reported from outside.
///
/// Time reported past the deadline is kept and taken off the next
/// period of a repeating timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnTimer {
    remaining: Duration,
    overshoot: Duration,
    kind: TimerKind,
}

impl TurnTimer {
    pub fn one_shot(delay: Duration) -> Self {
        Self {
            remaining: delay,
            overshoot: Duration::ZERO,
            kind: TimerKind::OneShot,
        }
    }

    pub fn repeating(cadence: Duration) -> Self {
        Self {
            remaining: cadence,
            overshoot: Duration::ZERO,
            kind: TimerKind::Repeating(cadence),
        }
    }

    #[inline]
    pub fn kind(&self) -> TimerKind {
        self.kind
    }

    #[inline]
    pub fn is_repeating(&self) -> bool {
        matches!(self.kind, TimerKind::Repeating(_))
    }

    /// Time left before the timer fires
    #[inline]
    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Count down by `elapsed`. Returns true once the timer is due.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if elapsed >= self.remaining {
            self.overshoot += elapsed - self.remaining;
            self.remaining = Duration::ZERO;
        } else {
            self.remaining -= elapsed;
        }
        self.remaining.is_zero()
    }

    /// Start the next period of a repeating timer, shortened by any
    /// overshoot. No-op for one-shots.
    pub fn rearm(&mut self) {
        if let TimerKind::Repeating(cadence) = self.kind {
            let carried = self.overshoot.min(cadence);
            self.remaining = cadence - carried;
            self.overshoot -= carried;
        }
    }
}
