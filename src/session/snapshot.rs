//! Read-only views of a session for presenters.

use serde::{Deserialize, Serialize};

use crate::core::Hsl;

use super::phase::Phase;

/// Per-session counters, reset on every `start`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub correct_guesses: u32,
    pub wrong_guesses: u32,
    pub ticks: u32,
}

impl SessionStats {
    /// Fraction of accepted guesses that hit the target.
    #[must_use]
    pub fn accuracy(&self) -> f64 {
        let total = self.correct_guesses + self.wrong_guesses;
        if total == 0 {
            return 0.0;
        }
        f64::from(self.correct_guesses) / f64::from(total)
    }
}

/// Everything a presenter needs to draw one frame.
///
/// `grid_size`, `tiles` and `target_index` describe the current round and
/// are empty unless the phase is `Active`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: Phase,
    pub score: u32,
    pub time_remaining: u32,
    pub best_score: u32,
    pub grid_size: Option<usize>,
    pub tiles: Vec<Hsl>,
    pub target_index: Option<usize>,
    pub stats: SessionStats,
}

impl SessionSnapshot {
    /// Snapshot of a controller that has never been started.
    #[must_use]
    pub fn idle(best_score: u32) -> Self {
        Self {
            phase: Phase::NotStarted,
            score: 0,
            time_remaining: 0,
            best_score,
            grid_size: None,
            tiles: Vec::new(),
            target_index: None,
            stats: SessionStats::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy() {
        assert_eq!(SessionStats::default().accuracy(), 0.0);

        let stats = SessionStats {
            correct_guesses: 3,
            wrong_guesses: 1,
            ..SessionStats::default()
        };
        assert!((stats.accuracy() - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_snapshot_serde() {
        let snapshot = SessionSnapshot {
            phase: Phase::Active,
            score: 4,
            time_remaining: 12,
            best_score: 9,
            grid_size: Some(2),
            tiles: vec![Hsl::new(10.0, 50.0, 50.0); 4],
            target_index: Some(1),
            stats: SessionStats::default(),
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: SessionSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
    }
}
