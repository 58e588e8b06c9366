//! Countdown handle.
//!
//! Each time the countdown is armed it gets a fresh `CountdownEpoch`. Timer
//! drivers stamp every tick with the epoch they were started under, and the
//! session only applies ticks for the epoch that is currently armed. A tick
//! that was already in flight when the session ended or restarted is
//! therefore dropped instead of hitting the new session.

use serde::{Deserialize, Serialize};

/// Identifier of one armed countdown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CountdownEpoch(pub u64);

impl std::fmt::Display for CountdownEpoch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Epoch({})", self.0)
    }
}

/// Armed/disarmed state of the session's countdown.
#[derive(Clone, Debug, Default)]
pub struct Countdown {
    last_epoch: u64,
    armed: Option<CountdownEpoch>,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm with a new epoch, replacing any armed one.
    pub fn arm(&mut self) -> CountdownEpoch {
        self.last_epoch += 1;
        let epoch = CountdownEpoch(self.last_epoch);
        self.armed = Some(epoch);
        epoch
    }

    /// Stop accepting ticks.
    pub fn disarm(&mut self) -> Option<CountdownEpoch> {
        self.armed.take()
    }

    /// Currently armed epoch, if any.
    #[must_use]
    pub fn armed(&self) -> Option<CountdownEpoch> {
        self.armed
    }

    /// True if a tick stamped with `epoch` should be applied.
    #[must_use]
    pub fn accepts(&self, epoch: CountdownEpoch) -> bool {
        self.armed == Some(epoch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_disarmed() {
        let countdown = Countdown::new();
        assert_eq!(countdown.armed(), None);
        assert!(!countdown.accepts(CountdownEpoch(0)));
    }

    #[test]
    fn test_rearm_invalidates_previous_epoch() {
        let mut countdown = Countdown::new();
        let first = countdown.arm();
        assert!(countdown.accepts(first));

        let second = countdown.arm();
        assert_ne!(first, second);
        assert!(!countdown.accepts(first));
        assert!(countdown.accepts(second));
    }

    #[test]
    fn test_disarm() {
        let mut countdown = Countdown::new();
        let epoch = countdown.arm();

        assert_eq!(countdown.disarm(), Some(epoch));
        assert!(!countdown.accepts(epoch));
        assert_eq!(countdown.disarm(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(CountdownEpoch(3).to_string(), "Epoch(3)");
    }
}
