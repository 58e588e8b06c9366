//! Core value types: colors, randomness, configuration, errors.
//!
//! Nothing in here knows about rounds or sessions.

pub mod color;
pub mod config;
pub mod error;
pub mod rng;

pub use color::{Channel, Hsl};
pub use config::{GameConfig, INITIAL_TIME, MAX_TIME, TIME_BONUS, WRONG_PENALTY};
pub use error::ConfigError;
pub use rng::{GameRng, GameRngState, RandomSource};
