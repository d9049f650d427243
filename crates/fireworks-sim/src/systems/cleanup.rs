//! Survival checks: particles die by leaving the screen or by old age.

use fireworks_core::viewport::Viewport;

use crate::particle::Particle;

/// Whether the particle is still on screen.
pub fn is_visible(particle: &Particle, viewport: &Viewport) -> bool {
    viewport.contains(particle.position.screen_space(viewport))
}

/// Whether the particle has reached its lifespan. Immortal particles never expire.
pub fn is_expired(particle: &Particle) -> bool {
    particle
        .lifespan
        .is_some_and(|lifespan| particle.age >= lifespan)
}

/// Visible and not expired. Bounds are checked before age.
pub fn survives(particle: &Particle, viewport: &Viewport) -> bool {
    is_visible(particle, viewport) && !is_expired(particle)
}
