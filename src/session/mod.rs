//! Session controller.
//!
//! Owns the game lifecycle: phase, score, countdown and best score. Calls
//! into `crate::round` once per round.

pub mod controller;
pub mod countdown;
pub mod phase;
pub mod snapshot;

pub use controller::Session;
pub use countdown::{Countdown, CountdownEpoch};
pub use phase::{GuessOutcome, Phase, TickOutcome};
pub use snapshot::{SessionSnapshot, SessionStats};
