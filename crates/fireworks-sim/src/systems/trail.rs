//! Trail sparks emitted behind ascending fireworks.

use fireworks_core::constants::{
    SPARK_INTERVAL_FACTOR, SPARK_LIFESPAN, SPARK_SPEED, SPARK_SPEED_DIVISOR,
};
use fireworks_core::types::Vector;

use crate::particle::Particle;
use crate::random::RandomSource;

/// Minimum time between sparks at `velocity`. Faster fireworks spark less often.
pub fn spark_interval(velocity: Vector) -> f64 {
    SPARK_INTERVAL_FACTOR * (velocity.length() / SPARK_SPEED_DIVISOR)
}

/// Emit a spark if the firework's timer has passed the interval.
///
/// Resets the timer on emission. Returns `None` for non-fireworks, when the
/// interval has not elapsed, and when the velocity is exactly zero (there is
/// no direction to trail along).
pub fn emit<R: RandomSource + ?Sized>(firework: &mut Particle, rng: &mut R) -> Option<Particle> {
    let velocity = firework.velocity;
    let interval = spark_interval(velocity);
    let due = firework.kind.last_spark().is_some_and(|t| t > interval);
    if !due {
        return None;
    }

    let direction = match velocity.normalised() {
        Ok(direction) => direction,
        Err(err) => {
            tracing::trace!(error = %err, "skipping trail spark");
            return None;
        }
    };

    if let Some(timer) = firework.kind.last_spark_mut() {
        *timer = 0.0;
    }

    let colour = firework.colour(rng);
    Some(Particle::spark(
        firework.position,
        -direction * SPARK_SPEED,
        colour,
        Some(rng.uniform(SPARK_LIFESPAN)),
    ))
}
