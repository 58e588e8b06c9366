//! Round generation.
//!
//! A round is a square grid of identical tiles with a single odd one out.
//! Grid size and color gap are pure functions of the score; everything
//! else is drawn from the injected `RandomSource`.

pub mod generator;
pub mod grid;

pub use generator::{build_round, delta, generate_colors, grid_size, MAX_DELTA, MIN_DELTA};
pub use grid::{ColorPair, Round, MAX_GRID_SIZE, MIN_GRID_SIZE};
