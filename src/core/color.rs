//! HSL color values.
//!
//! Tiles are described in hue/saturation/lightness space because the
//! difficulty knob is a percentage-point nudge on saturation or lightness.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An HSL color.
///
/// - `hue` in degrees, `[0, 360)`
/// - `saturation` and `lightness` in percent, `[0, 100]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

/// The HSL channel that carries a round's difference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Saturation,
    Lightness,
}

impl Hsl {
    /// Create a color, wrapping hue into `[0, 360)` and clamping the
    /// percentages into `[0, 100]`.
    #[must_use]
    pub fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue: hue.rem_euclid(360.0),
            saturation: saturation.clamp(0.0, 100.0),
            lightness: lightness.clamp(0.0, 100.0),
        }
    }

    /// Value of a single percentage channel.
    #[must_use]
    pub fn channel(&self, channel: Channel) -> f64 {
        match channel {
            Channel::Saturation => self.saturation,
            Channel::Lightness => self.lightness,
        }
    }

    /// Copy of this color with one channel replaced.
    #[must_use]
    pub fn with_channel(self, channel: Channel, value: f64) -> Self {
        match channel {
            Channel::Saturation => Self::new(self.hue, value, self.lightness),
            Channel::Lightness => Self::new(self.hue, self.saturation, value),
        }
    }

    /// True if any component differs from `other` by at least `threshold`.
    ///
    /// Hue distance is measured around the color wheel.
    #[must_use]
    pub fn distinguishable(&self, other: &Hsl, threshold: f64) -> bool {
        let dh = (self.hue - other.hue).abs();
        dh.min(360.0 - dh) >= threshold
            || (self.saturation - other.saturation).abs() >= threshold
            || (self.lightness - other.lightness).abs() >= threshold
    }

    /// Convert to 8-bit sRGB.
    #[must_use]
    pub fn to_rgb(&self) -> [u8; 3] {
        let h = self.hue.rem_euclid(360.0);
        let s = self.saturation / 100.0;
        let l = self.lightness / 100.0;

        let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = l - c / 2.0;

        let (r, g, b) = match h {
            h if h < 60.0 => (c, x, 0.0),
            h if h < 120.0 => (x, c, 0.0),
            h if h < 180.0 => (0.0, c, x),
            h if h < 240.0 => (0.0, x, c),
            h if h < 300.0 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let to_byte = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        [to_byte(r), to_byte(g), to_byte(b)]
    }
}

/// Formats as a CSS color, e.g. `hsl(210.0, 55.3%, 41.0%)`.
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({:.1}, {:.1}%, {:.1}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}
