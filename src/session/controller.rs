//! Session controller: phase transitions, scoring and the countdown.
//!
//! ```text
//!              start                 clock hits 0
//! NotStarted ────────▶ Active ─────────────────────▶ Ended
//!                      │  ▲                            │
//!                      └──┘ start (full reset)         │
//!                        ▲                             │
//!                        └──────────── start ──────────┘
//! ```
//!
//! The controller is synchronous. Whoever owns it feeds it `start`,
//! `guess` and tick events one at a time; see `crate::host` for the tokio
//! driver.

use tracing::{debug, info};

use crate::core::{GameConfig, GameRng, RandomSource};
use crate::round::{build_round, Round};

use super::countdown::{Countdown, CountdownEpoch};
use super::phase::{GuessOutcome, Phase, TickOutcome};
use super::snapshot::{SessionSnapshot, SessionStats};

/// One player's game.
///
/// Owns the current round exclusively. `best_score` survives restarts of
/// the same session but nothing is persisted.
#[derive(Clone, Debug)]
pub struct Session<R = GameRng> {
    config: GameConfig,
    rng: R,
    phase: Phase,
    score: u32,
    time_remaining: u32,
    best_score: u32,
    round: Option<Round>,
    countdown: Countdown,
    stats: SessionStats,
}

impl Session<GameRng> {
    /// Create a session using `config.seed`, or entropy if unset.
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        Self::with_rng(config, rng)
    }
}

impl Default for Session<GameRng> {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl<R: RandomSource> Session<R> {
    /// Create a session drawing from `rng`.
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            phase: Phase::NotStarted,
            score: 0,
            time_remaining: 0,
            best_score: 0,
            round: None,
            countdown: Countdown::new(),
            stats: SessionStats::default(),
        }
    }

    // === Events ===

    /// Start (or restart) a game.
    ///
    /// Valid from every phase. Resets score, clock, stats and round, and
    /// arms a fresh countdown epoch so ticks from any previous game are
    /// ignored. The clock starts at `initial_time`, capped at `max_time`.
    pub fn start(&mut self) -> SessionSnapshot {
        if let Some(previous) = self.countdown.disarm() {
            debug!(%previous, "restart cancels running countdown");
        }

        self.phase = Phase::Active;
        self.score = 0;
        self.time_remaining = self.config.initial_time.min(self.config.max_time);
        self.stats = SessionStats::default();
        self.round = Some(build_round(0, &mut self.rng));
        let epoch = self.countdown.arm();

        info!(
            %epoch,
            time_remaining = self.time_remaining,
            best_score = self.best_score,
            "session started"
        );

        self.snapshot()
    }

    /// Handle a click on tile `index`.
    ///
    /// A hit scores a point, adds the time bonus (capped at `max_time`) and
    /// replaces the round. A miss deducts the penalty (floored at 0) and
    /// never ends the game on its own; the next tick does. Anything outside
    /// an active game or off the grid is ignored.
    pub fn guess(&mut self, index: usize) -> GuessOutcome {
        let Some(round) = self.round.as_ref().filter(|_| self.phase.is_active()) else {
            debug!(index, phase = %self.phase, "guess ignored outside active game");
            return GuessOutcome::Ignored;
        };

        if index >= round.tile_count() {
            debug!(index, tiles = round.tile_count(), "guess ignored, index off grid");
            return GuessOutcome::Ignored;
        }

        if round.is_target(index) {
            self.score += 1;
            self.time_remaining = self
                .time_remaining
                .saturating_add(self.config.time_bonus)
                .min(self.config.max_time);
            self.stats.correct_guesses += 1;
            self.round = Some(build_round(self.score, &mut self.rng));

            debug!(score = self.score, time_remaining = self.time_remaining, "correct guess");
            GuessOutcome::Correct {
                score: self.score,
                time_remaining: self.time_remaining,
            }
        } else {
            self.time_remaining = self.time_remaining.saturating_sub(self.config.wrong_penalty);
            self.stats.wrong_guesses += 1;

            debug!(index, time_remaining = self.time_remaining, "wrong guess");
            GuessOutcome::Wrong {
                time_remaining: self.time_remaining,
            }
        }
    }

    /// Apply one tick to the currently armed countdown.
    pub fn tick(&mut self) -> TickOutcome {
        match self.countdown.armed() {
            Some(epoch) => self.tick_for(epoch),
            None => TickOutcome::Ignored,
        }
    }

    /// Apply one tick scheduled under `epoch`.
    ///
    /// Ticks from any other epoch are stale and ignored.
    pub fn tick_for(&mut self, epoch: CountdownEpoch) -> TickOutcome {
        if !self.phase.is_active() || !self.countdown.accepts(epoch) {
            debug!(%epoch, phase = %self.phase, "stale tick ignored");
            return TickOutcome::Ignored;
        }

        self.stats.ticks += 1;
        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining > 0 {
            return TickOutcome::Counted {
                time_remaining: self.time_remaining,
            };
        }

        let new_best = self.end();
        TickOutcome::Expired {
            final_score: self.score,
            new_best,
        }
    }

    /// Active → Ended. Returns true if the best score was beaten.
    fn end(&mut self) -> bool {
        self.phase = Phase::Ended;
        self.round = None;
        self.countdown.disarm();

        let new_best = self.score > self.best_score;
        if new_best {
            self.best_score = self.score;
        }

        info!(
            score = self.score,
            best_score = self.best_score,
            new_best,
            correct = self.stats.correct_guesses,
            wrong = self.stats.wrong_guesses,
            "session ended"
        );
        new_best
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    #[must_use]
    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    /// The round being played, `None` unless active.
    #[must_use]
    pub fn current_round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    /// Epoch that ticks must carry to be applied, `None` unless active.
    #[must_use]
    pub fn countdown_epoch(&self) -> Option<CountdownEpoch> {
        self.countdown.armed()
    }

    #[must_use]
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The random source, e.g. to capture a `GameRngState` for replay.
    #[must_use]
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Copy of everything a presenter renders.
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let round = self.round.as_ref();
        SessionSnapshot {
            phase: self.phase,
            score: self.score,
            time_remaining: self.time_remaining,
            best_score: self.best_score,
            grid_size: round.map(Round::grid_size),
            tiles: round.map(|r| r.tiles().to_vec()).unwrap_or_default(),
            target_index: round.map(Round::target_index),
            stats: self.stats,
        }
    }
}
