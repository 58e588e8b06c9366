//! Round generation and difficulty scaling.
//!
//! Difficulty is driven entirely by the score that unlocked the round:
//!
//! - `grid_size(score)` grows the field from 2×2 up to 8×8
//! - `delta(score)` shrinks the color gap from 15 points down to 1
//!
//! Randomness (hue, base saturation/lightness, channel, target position)
//! comes from an injected `RandomSource`.

use crate::core::{Channel, Hsl, RandomSource};

use super::grid::{ColorPair, Round, MIN_GRID_SIZE};

/// Largest color gap, used at score 0.
pub const MAX_DELTA: u32 = 15;
/// Smallest color gap.
pub const MIN_DELTA: u32 = 1;
/// Score points per one-point reduction of the gap.
pub const DELTA_STEP: u32 = 3;

/// Inclusive lower score bounds for each grid size, largest first.
const GRID_THRESHOLDS: [(u32, usize); 6] = [(45, 8), (30, 7), (20, 6), (12, 5), (6, 4), (2, 3)];

const HUE_RANGE: std::ops::Range<f64> = 0.0..360.0;
const SATURATION_RANGE: std::ops::Range<f64> = 40.0..80.0;
const LIGHTNESS_RANGE: std::ops::Range<f64> = 30.0..70.0;

/// Color gap in percentage points for a round unlocked at `score`.
///
/// `max(1, 15 - floor(score / 3))`
#[must_use]
pub fn delta(score: u32) -> u32 {
    MAX_DELTA.saturating_sub(score / DELTA_STEP).max(MIN_DELTA)
}

/// Grid dimension for a round unlocked at `score`.
#[must_use]
pub fn grid_size(score: u32) -> usize {
    GRID_THRESHOLDS
        .iter()
        .find(|(min_score, _)| score >= *min_score)
        .map(|&(_, size)| size)
        .unwrap_or(MIN_GRID_SIZE)
}

/// Draw a base color and a target that differs by `delta(score)` on one
/// channel.
///
/// The delta is subtracted when the base channel is above 50 and added
/// otherwise, so the target always stays inside `[0, 100]`.
pub fn generate_colors(score: u32, rng: &mut impl RandomSource) -> ColorPair {
    let hue = rng.gen_f64(HUE_RANGE);
    let saturation = rng.gen_f64(SATURATION_RANGE);
    let lightness = rng.gen_f64(LIGHTNESS_RANGE);
    let base = Hsl::new(hue, saturation, lightness);

    let channel = if rng.coin_flip() {
        Channel::Saturation
    } else {
        Channel::Lightness
    };

    let delta = delta(score);
    let value = base.channel(channel);
    let shifted = if value > 50.0 {
        value - f64::from(delta)
    } else {
        value + f64::from(delta)
    };

    ColorPair {
        base,
        target: base.with_channel(channel, shifted),
        channel,
        delta,
    }
}

/// Build the round unlocked at `score`.
pub fn build_round(score: u32, rng: &mut impl RandomSource) -> Round {
    let size = grid_size(score);
    let colors = generate_colors(score, rng);
    let target_index = rng.gen_index(size * size);

    Round::new(size, colors, target_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;
    use crate::round::MAX_GRID_SIZE;

    /// Replays fixed values so sign and channel selection can be checked.
    struct Scripted {
        floats: Vec<f64>,
        flip: bool,
        index: usize,
    }

    impl RandomSource for Scripted {
        fn gen_f64(&mut self, range: std::ops::Range<f64>) -> f64 {
            let v = self.floats.remove(0);
            assert!(range.contains(&v), "scripted value outside {range:?}");
            v
        }

        fn gen_index(&mut self, upper: usize) -> usize {
            assert!(self.index < upper);
            self.index
        }

        fn coin_flip(&mut self) -> bool {
            self.flip
        }
    }

    #[test]
    fn test_delta_values() {
        assert_eq!(delta(0), 15);
        assert_eq!(delta(2), 15);
        assert_eq!(delta(3), 14);
        assert_eq!(delta(6), 13);
        assert_eq!(delta(41), 2);
        assert_eq!(delta(42), 1);
        assert_eq!(delta(44), 1);
        assert_eq!(delta(45), 1);
        assert_eq!(delta(1000), 1);
        assert_eq!(delta(u32::MAX), 1);
    }

    #[test]
    fn test_grid_size_thresholds() {
        assert_eq!(grid_size(0), 2);
        assert_eq!(grid_size(1), 2);
        assert_eq!(grid_size(2), 3);
        assert_eq!(grid_size(5), 3);
        assert_eq!(grid_size(6), 4);
        assert_eq!(grid_size(11), 4);
        assert_eq!(grid_size(12), 5);
        assert_eq!(grid_size(19), 5);
        assert_eq!(grid_size(20), 6);
        assert_eq!(grid_size(29), 6);
        assert_eq!(grid_size(30), 7);
        assert_eq!(grid_size(44), 7);
        assert_eq!(grid_size(45), 8);
        assert_eq!(grid_size(u32::MAX), MAX_GRID_SIZE);
    }

    #[test]
    fn test_saturation_above_half_subtracts() {
        let mut rng = Scripted {
            floats: vec![200.0, 70.0, 45.0],
            flip: true,
            index: 0,
        };
        let pair = generate_colors(0, &mut rng);

        assert_eq!(pair.channel, Channel::Saturation);
        assert_eq!(pair.delta, 15);
        assert_eq!(pair.base, Hsl::new(200.0, 70.0, 45.0));
        assert_eq!(pair.target, Hsl::new(200.0, 55.0, 45.0));
    }

    #[test]
    fn test_lightness_at_half_adds() {
        let mut rng = Scripted {
            floats: vec![10.0, 60.0, 50.0],
            flip: false,
            index: 0,
        };
        let pair = generate_colors(9, &mut rng);

        assert_eq!(pair.channel, Channel::Lightness);
        assert_eq!(pair.delta, 12);
        assert_eq!(pair.target.lightness, 62.0);
        assert_eq!(pair.target.saturation, pair.base.saturation);
        assert_eq!(pair.target.hue, pair.base.hue);
    }

    #[test]
    fn test_build_round_places_target() {
        let mut rng = Scripted {
            floats: vec![120.0, 50.0, 35.0],
            flip: false,
            index: 7,
        };
        let round = build_round(2, &mut rng);

        assert_eq!(round.grid_size(), 3);
        assert_eq!(round.tile_count(), 9);
        assert_eq!(round.target_index(), 7);
        assert_eq!(round.tile(7), Some(Hsl::new(120.0, 50.0, 50.0)));
        assert!(round
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != 7)
            .all(|(_, &c)| c == Hsl::new(120.0, 50.0, 35.0)));
    }

    #[test]
    fn test_generated_colors_in_range() {
        let mut rng = GameRng::new(42);

        for score in 0..100 {
            let pair = generate_colors(score, &mut rng);
            assert!((0.0..360.0).contains(&pair.base.hue));
            assert!((40.0..80.0).contains(&pair.base.saturation));
            assert!((30.0..70.0).contains(&pair.base.lightness));

            let moved = (pair.target.channel(pair.channel) - pair.base.channel(pair.channel)).abs();
            assert!((moved - f64::from(delta(score))).abs() < 1e-9);
            assert!(pair.target.distinguishable(&pair.base, f64::from(pair.delta) - 1e-9));
        }
    }

    #[test]
    fn test_same_seed_same_rounds() {
        let mut rng1 = GameRng::new(9);
        let mut rng2 = GameRng::new(9);

        for score in 0..30 {
            assert_eq!(build_round(score, &mut rng1), build_round(score, &mut rng2));
        }
    }
}
