//! Fundamental geometric and simulation types.

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::constants::TRIANGLE_SIZE;
use crate::error::VectorError;
use crate::viewport::Viewport;

/// 2D vector in world space. Operators never mutate an operand.
///
/// World x spans roughly [-1, 1] across the viewport width; y = 0 is the
/// bottom edge and grows upward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks run so far.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Vector {
    pub const ZERO: Self = Self::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn scale(self, k: f64) -> Self {
        Self::new(self.x * k, self.y * k)
    }

    /// `self * (1 / k)`. Rejects zero and non-finite divisors.
    pub fn divide(self, k: f64) -> Result<Self, VectorError> {
        if !k.is_finite() {
            return Err(VectorError::InvalidOperand { operand: k });
        }
        if k == 0.0 {
            return Err(VectorError::DivideByZero);
        }
        Ok(self.scale(1.0 / k))
    }

    pub fn length(self) -> f64 {
        DVec2::from(self).length()
    }

    /// Unit vector in the same direction. Fails on the zero vector.
    pub fn normalised(self) -> Result<Self, VectorError> {
        self.divide(self.length())
    }

    /// Map world coordinates to pixels.
    ///
    /// Both axes are scaled by the viewport width, so the projection is not
    /// aspect-correct: y is multiplied by two thirds of the width.
    pub fn screen_space(self, viewport: &Viewport) -> DVec2 {
        let width = viewport.width as f64;
        DVec2::new(
            self.x * width / 2.0 + width / 2.0,
            self.y * (width / 3.0 * 2.0),
        )
    }

    /// Upward-pointing triangle around this point: apex, right corner, left corner.
    pub fn as_triangle(self, viewport: &Viewport, size: f64) -> [DVec2; 3] {
        [
            (self + Vector::new(0.0, size)).screen_space(viewport),
            (self + Vector::new(size, -size)).screen_space(viewport),
            (self + Vector::new(-size, -size)).screen_space(viewport),
        ]
    }

    /// [`Vector::as_triangle`] with the default particle size.
    pub fn triangle(self, viewport: &Viewport) -> [DVec2; 3] {
        self.as_triangle(viewport, TRIANGLE_SIZE)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        *self = *self + rhs;
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        self + (-rhs)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    fn mul(self, k: f64) -> Vector {
        self.scale(k)
    }
}

impl From<Vector> for DVec2 {
    fn from(v: Vector) -> Self {
        DVec2::new(v.x, v.y)
    }
}

impl From<DVec2> for Vector {
    fn from(v: DVec2) -> Self {
        Vector::new(v.x, v.y)
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
