//! Kinematic integration.

use fireworks_core::types::Vector;

/// Semi-implicit Euler: velocity first, then position with the new velocity.
pub fn integrate(position: &mut Vector, velocity: &mut Vector, acceleration: Vector, dt: f64) {
    *velocity += acceleration * dt;
    *position += *velocity * dt;
}
