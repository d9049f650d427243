//! Builds what the rendering layer consumes: particle views and triangle buffers.

use fireworks_core::state::{ParticleView, RenderBatch};
use fireworks_core::viewport::Viewport;

use crate::particle::Particle;
use crate::random::RandomSource;

/// One view per particle, in collection order. Colours are read once each.
pub fn build_views<R: RandomSource + ?Sized>(particles: &[Particle], rng: &mut R) -> Vec<ParticleView> {
    particles
        .iter()
        .map(|p| ParticleView {
            kind: p.entity_kind(),
            position: p.position,
            colour: p.colour(rng),
        })
        .collect()
}

/// Triangle-list buffers: three screen points and the colour repeated for
/// each of the three vertices.
pub fn build_batch<R: RandomSource + ?Sized>(
    particles: &[Particle],
    viewport: &Viewport,
    rng: &mut R,
) -> RenderBatch {
    let mut batch = RenderBatch::with_capacity(particles.len());
    for particle in particles {
        for point in particle.position.triangle(viewport) {
            let point = point.as_vec2();
            batch.vertices.extend_from_slice(&[point.x, point.y]);
        }
        let colour = particle.colour(rng).to_array();
        for _ in 0..3 {
            batch.colours.extend_from_slice(&colour);
        }
    }
    batch
}
