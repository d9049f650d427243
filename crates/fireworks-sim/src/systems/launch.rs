//! Launch policy: which fireworks enter the sky, and when.

use fireworks_core::constants::{
    INITIAL_LAUNCHES, LAUNCH_COLOUR, LAUNCH_LIFESPAN_SECS, LAUNCH_POOL, LAUNCH_VELOCITY_X,
    LAUNCH_VELOCITY_Y, LAUNCH_X,
};
use fireworks_core::types::Vector;

use crate::particle::Particle;
use crate::random::RandomSource;

/// A new firework or super firework on the ground line.
///
/// Variant is drawn from the launch pool, so plain fireworks are twice as
/// likely. Lifespan is a whole number of seconds.
pub fn random_launch<R: RandomSource + ?Sized>(rng: &mut R) -> Particle {
    let kind = LAUNCH_POOL[rng.integer_below(0..LAUNCH_POOL.len() as u32) as usize];
    let position = Vector::new(rng.uniform(LAUNCH_X), 0.0);
    let velocity = Vector::new(
        rng.uniform(LAUNCH_VELOCITY_X),
        rng.uniform(LAUNCH_VELOCITY_Y),
    );
    let lifespan = rng.integer_below(LAUNCH_LIFESPAN_SECS) as f64;
    Particle::new(kind, position, velocity, LAUNCH_COLOUR, Some(lifespan))
}

/// Population at startup.
pub fn initial_population<R: RandomSource + ?Sized>(rng: &mut R) -> Vec<Particle> {
    let count = rng.integer_below(INITIAL_LAUNCHES);
    (0..count).map(|_| random_launch(rng)).collect()
}

/// With probability `probability`, append one random launch. Returns whether it fired.
pub fn maybe_launch<R: RandomSource + ?Sized>(
    rng: &mut R,
    probability: f64,
    particles: &mut Vec<Particle>,
) -> bool {
    if !rng.chance(probability) {
        return false;
    }
    let firework = random_launch(rng);
    tracing::debug!(
        kind = ?firework.entity_kind(),
        x = firework.position.x,
        lifespan = ?firework.lifespan,
        "launch"
    );
    particles.push(firework);
    true
}
