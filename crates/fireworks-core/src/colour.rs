//! 8-bit RGB colour.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Colour {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Fade toward black. `remaining` is clamped to [0, 1] and each
    /// channel is floored.
    pub fn faded(self, remaining: f64) -> Self {
        let f = if remaining.is_nan() {
            0.0
        } else {
            remaining.clamp(0.0, 1.0)
        };
        self.scaled(f)
    }

    /// Multiply each channel by `factor`, flooring and saturating at 0 and 255.
    pub fn scaled(self, factor: f64) -> Self {
        let channel = |c: u8| (c as f64 * factor).floor().clamp(0.0, 255.0) as u8;
        Self::new(channel(self.r), channel(self.g), channel(self.b))
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}
