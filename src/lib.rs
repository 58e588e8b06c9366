//! # hue-hunt
//!
//! Game progression engine for a find-the-odd-tile color reaction game.
//!
//! A square grid of identical tiles is shown; one tile differs slightly in
//! saturation or lightness. Find it before the countdown runs out. Every hit
//! scores a point, buys a little time and makes the next grid larger and
//! the difference smaller.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine exposes plain snapshots and
//!    accepts plain events. Rendering is somebody else's job.
//!
//! 2. **Injectable Randomness**: Round generation draws from a
//!    `RandomSource`. Seeded `GameRng` sessions replay identically.
//!
//! 3. **Explicit Timer**: The countdown is an armed epoch owned by the
//!    session. Ticks from a cancelled countdown can never reach a new game.
//!
//! ## Modules
//!
//! - `core`: HSL colors, random source, configuration, errors
//! - `round`: Difficulty curves and round construction
//! - `session`: Phase state machine, scoring, countdown
//! - `host`: Tokio task that owns a session and drives its countdown
//!
//! ## Example
//!
//! ```
//! use hue_hunt::{GameConfig, GuessOutcome, Phase, Session};
//!
//! let mut session = Session::new(GameConfig::default().with_seed(7));
//! let snapshot = session.start();
//! assert_eq!(snapshot.tiles.len(), 4);
//!
//! let target = snapshot.target_index.unwrap();
//! assert!(matches!(session.guess(target), GuessOutcome::Correct { score: 1, .. }));
//! assert_eq!(session.phase(), Phase::Active);
//! ```

pub mod core;
pub mod host;
pub mod round;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Channel, ConfigError, GameConfig, GameRng, GameRngState, Hsl, RandomSource};

pub use crate::round::{build_round, delta, generate_colors, grid_size, ColorPair, Round};

pub use crate::session::{
    CountdownEpoch, GuessOutcome, Phase, Session, SessionSnapshot, SessionStats, TickOutcome,
};

pub use crate::host::{spawn_host, HostError, HostHandle};
