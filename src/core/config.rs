//! Game configuration.
//!
//! `GameConfig` carries the countdown constants and the optional RNG seed.
//! Defaults reproduce the standard game:
//!
//! | field              | default |
//! |--------------------|---------|
//! | `initial_time`     | 15 s    |
//! | `time_bonus`       | 2 s     |
//! | `wrong_penalty`    | 3 s     |
//! | `max_time`         | 30 s    |
//! | `tick_interval_ms` | 1000    |
//!
//! Configuration can be layered: TOML file, then `HUE_HUNT_*` environment
//! variables, then builder calls.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Seconds on the clock when a session starts.
pub const INITIAL_TIME: u32 = 15;
/// Seconds added by a correct guess.
pub const TIME_BONUS: u32 = 2;
/// Seconds removed by a wrong guess.
pub const WRONG_PENALTY: u32 = 3;
/// Upper bound on the clock.
pub const MAX_TIME: u32 = 30;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Seconds on the clock after `start`.
    pub initial_time: u32,

    /// Seconds added per correct guess (capped at `max_time`).
    pub time_bonus: u32,

    /// Seconds removed per wrong guess (floored at 0).
    pub wrong_penalty: u32,

    /// Clock ceiling in seconds.
    pub max_time: u32,

    /// Real time between countdown ticks, in milliseconds.
    pub tick_interval_ms: u64,

    /// RNG seed. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            initial_time: INITIAL_TIME,
            time_bonus: TIME_BONUS,
            wrong_penalty: WRONG_PENALTY,
            max_time: MAX_TIME,
            tick_interval_ms: 1000,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_initial_time(mut self, seconds: u32) -> Self {
        self.initial_time = seconds;
        self
    }

    #[must_use]
    pub fn with_time_bonus(mut self, seconds: u32) -> Self {
        self.time_bonus = seconds;
        self
    }

    #[must_use]
    pub fn with_wrong_penalty(mut self, seconds: u32) -> Self {
        self.wrong_penalty = seconds;
        self
    }

    #[must_use]
    pub fn with_max_time(mut self, seconds: u32) -> Self {
        self.max_time = seconds;
        self
    }

    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Countdown period as a `Duration`.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check that the values describe a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_time == 0 {
            return Err(ConfigError::Invalid("max_time must be positive".into()));
        }
        if self.initial_time == 0 {
            return Err(ConfigError::Invalid("initial_time must be positive".into()));
        }
        if self.initial_time > self.max_time {
            return Err(ConfigError::Invalid(format!(
                "initial_time ({}) exceeds max_time ({})",
                self.initial_time, self.max_time
            )));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::Invalid(
                "tick_interval_ms must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a TOML document. Missing keys take defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional TOML file, then apply environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })?;
                toml::from_str(&raw)?
            }
            None => Self::default(),
        };

        config.apply_env(|name| std::env::var(name).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `HUE_HUNT_*` overrides using `lookup` to read variables.
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(v) = env_value::<u32>(&lookup, "HUE_HUNT_INITIAL_TIME")? {
            self.initial_time = v;
        }
        if let Some(v) = env_value::<u32>(&lookup, "HUE_HUNT_TIME_BONUS")? {
            self.time_bonus = v;
        }
        if let Some(v) = env_value::<u32>(&lookup, "HUE_HUNT_WRONG_PENALTY")? {
            self.wrong_penalty = v;
        }
        if let Some(v) = env_value::<u32>(&lookup, "HUE_HUNT_MAX_TIME")? {
            self.max_time = v;
        }
        if let Some(v) = env_value::<u64>(&lookup, "HUE_HUNT_TICK_INTERVAL_MS")? {
            self.tick_interval_ms = v;
        }
        if let Some(v) = env_value::<u64>(&lookup, "HUE_HUNT_SEED")? {
            self.seed = Some(v);
        }
        Ok(())
    }
}

fn env_value<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<Option<T>, ConfigError> {
    match lookup(name) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidEnv { name, value: raw }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.initial_time, 15);
        assert_eq!(config.time_bonus, 2);
        assert_eq!(config.wrong_penalty, 3);
        assert_eq!(config.max_time, 30);
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
        assert_eq!(config.seed, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new()
            .with_initial_time(10)
            .with_time_bonus(1)
            .with_wrong_penalty(5)
            .with_max_time(20)
            .with_tick_interval(Duration::from_millis(250))
            .with_seed(7);

        assert_eq!(config.initial_time, 10);
        assert_eq!(config.time_bonus, 1);
        assert_eq!(config.wrong_penalty, 5);
        assert_eq!(config.max_time, 20);
        assert_eq!(config.tick_interval_ms, 250);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn test_tick_interval_saturates() {
        let config = GameConfig::new().with_tick_interval(Duration::MAX);
        assert_eq!(config.tick_interval_ms, u64::MAX);
    }

    #[test]
    fn test_validation() {
        assert!(GameConfig::new().with_max_time(0).validate().is_err());
        assert!(GameConfig::new().with_initial_time(0).validate().is_err());
        assert!(GameConfig::new()
            .with_initial_time(31)
            .validate()
            .is_err());
        assert!(GameConfig::new()
            .with_tick_interval(Duration::ZERO)
            .validate()
            .is_err());
        assert!(GameConfig::new()
            .with_initial_time(30)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = GameConfig::from_toml_str("time_bonus = 4\nseed = 99\n").unwrap();
        assert_eq!(config.time_bonus, 4);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.initial_time, INITIAL_TIME);
        assert_eq!(config.max_time, MAX_TIME);
    }

    #[test]
    fn test_from_toml_rejects_invalid() {
        let err = GameConfig::from_toml_str("initial_time = 40\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = GameConfig::from_toml_str("initial_time = \"soon\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("HUE_HUNT_MAX_TIME", "45"),
            ("HUE_HUNT_SEED", " 1234 "),
        ]
        .into_iter()
        .collect();

        let mut config = GameConfig::default();
        config
            .apply_env(|name| vars.get(name).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.max_time, 45);
        assert_eq!(config.seed, Some(1234));
        assert_eq!(config.initial_time, INITIAL_TIME);
    }

    #[test]
    fn test_env_invalid_value() {
        let mut config = GameConfig::default();
        let err = config
            .apply_env(|name| (name == "HUE_HUNT_TIME_BONUS").then(|| "lots".to_string()))
            .unwrap_err();

        match err {
            ConfigError::InvalidEnv { name, value } => {
                assert_eq!(name, "HUE_HUNT_TIME_BONUS");
                assert_eq!(value, "lots");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load(Some(Path::new("/nonexistent/hue-hunt.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
