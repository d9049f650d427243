//! Per-tick systems that advance the particle collection.
//!
//! Systems are plain functions over particles and a random source. They do
//! not own state; the collection is rebuilt every tick.

pub mod cleanup;
pub mod detonation;
pub mod launch;
pub mod movement;
pub mod render;
pub mod trail;

use fireworks_core::types::Vector;
use fireworks_core::viewport::Viewport;

use crate::particle::Particle;
use crate::random::RandomSource;

/// Update every particle and flatten the results into the next collection.
///
/// The input collection is consumed; nothing from it outlives the tick
/// unless an update returned it.
pub fn step<R: RandomSource + ?Sized>(
    particles: Vec<Particle>,
    dt: f64,
    acceleration: Vector,
    viewport: &Viewport,
    rng: &mut R,
) -> Vec<Particle> {
    let mut next = Vec::with_capacity(particles.len());
    for particle in particles {
        particle.advance(dt, acceleration, viewport, rng, &mut next);
    }
    next
}
