//! Session phase and event outcomes.

use serde::{Deserialize, Serialize};

/// Lifecycle phase of a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the first `start`.
    #[default]
    NotStarted,
    /// Countdown running, guesses accepted.
    Active,
    /// Countdown exhausted. Only `start` leaves this phase.
    Ended,
}

impl Phase {
    #[must_use]
    pub fn is_active(self) -> bool {
        self == Phase::Active
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::NotStarted => "not started",
            Phase::Active => "active",
            Phase::Ended => "ended",
        };
        f.write_str(name)
    }
}

/// Result of a `guess` call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    /// Hit the target. A new round has replaced the old one.
    Correct { score: u32, time_remaining: u32 },
    /// Missed. Time was deducted; score and round are unchanged.
    Wrong { time_remaining: u32 },
    /// Not active, or index outside the grid. Nothing changed.
    Ignored,
}

/// Result of a countdown tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// One second elapsed; the game continues.
    Counted { time_remaining: u32 },
    /// The clock ran out and the session ended.
    Expired { final_score: u32, new_best: bool },
    /// Stale or unarmed tick. Nothing changed.
    Ignored,
}
