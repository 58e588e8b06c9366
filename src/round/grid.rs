//! The `Round` value: one puzzle grid.

use serde::{Deserialize, Serialize};

use crate::core::{Channel, Hsl};

/// Smallest grid dimension.
pub const MIN_GRID_SIZE: usize = 2;
/// Largest grid dimension.
pub const MAX_GRID_SIZE: usize = 8;

/// Base and target colors for one round.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorPair {
    /// Color of every non-target tile.
    pub base: Hsl,
    /// Color of the odd tile.
    pub target: Hsl,
    /// Channel that differs between `base` and `target`.
    pub channel: Channel,
    /// Percentage-point gap on `channel`.
    pub delta: u32,
}

/// One puzzle instance: a `grid_size` × `grid_size` field of tiles, exactly
/// one of which differs.
///
/// Rounds are never mutated after construction. A new round replaces the
/// old one wholesale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    grid_size: usize,
    tiles: Vec<Hsl>,
    target_index: usize,
    colors: ColorPair,
}

impl Round {
    /// Lay out `grid_size²` copies of `colors.base` with `colors.target` at
    /// `target_index`.
    pub(crate) fn new(grid_size: usize, colors: ColorPair, target_index: usize) -> Self {
        debug_assert!((MIN_GRID_SIZE..=MAX_GRID_SIZE).contains(&grid_size));

        let total = grid_size * grid_size;
        debug_assert!(target_index < total, "target index out of bounds");

        let mut tiles = vec![colors.base; total];
        tiles[target_index] = colors.target;

        Self {
            grid_size,
            tiles,
            target_index,
            colors,
        }
    }

    /// Grid dimension (the grid is square).
    #[must_use]
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Row-major tile colors.
    #[must_use]
    pub fn tiles(&self) -> &[Hsl] {
        &self.tiles
    }

    /// Number of tiles (`grid_size²`).
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Position of the odd tile.
    #[must_use]
    pub fn target_index(&self) -> usize {
        self.target_index
    }

    /// Color of the tile at `index`, if in range.
    #[must_use]
    pub fn tile(&self, index: usize) -> Option<Hsl> {
        self.tiles.get(index).copied()
    }

    /// True if `index` is the odd tile.
    #[must_use]
    pub fn is_target(&self, index: usize) -> bool {
        index == self.target_index
    }

    /// Base/target colors and the delta used to build this round.
    #[must_use]
    pub fn colors(&self) -> &ColorPair {
        &self.colors
    }

    /// Iterate the grid one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[Hsl]> {
        self.tiles.chunks(self.grid_size)
    }
}
