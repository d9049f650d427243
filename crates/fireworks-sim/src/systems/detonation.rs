//! Detonation bursts for fireworks that fail their survival check.

use fireworks_core::colour::Colour;
use fireworks_core::constants::{
    BURST_SPEED, FIREWORK_BURST_CHANNEL, FIREWORK_BURST_COUNT, FIREWORK_BURST_LIFESPAN,
    SUPER_BURST_CHANNEL, SUPER_BURST_COUNT, SUPER_BURST_LIFESPAN,
};
use fireworks_core::types::Vector;

use crate::particle::{Particle, ParticleKind};
use crate::random::RandomSource;

/// Replace a dead firework with its burst. Sparks produce nothing.
///
/// Children start at the parent's final position with the parent's final
/// velocity plus a random kick, and share one burst colour.
pub fn detonate<R: RandomSource + ?Sized>(parent: &Particle, rng: &mut R, out: &mut Vec<Particle>) {
    match parent.kind {
        ParticleKind::Spark => {}
        ParticleKind::Firework { .. } => {
            let colour = burst_colour(rng, FIREWORK_BURST_CHANNEL);
            let count = rng.integer(FIREWORK_BURST_COUNT);
            out.reserve(count as usize);
            for _ in 0..count {
                let velocity = parent.velocity + burst_offset(rng);
                let lifespan = rng.uniform(FIREWORK_BURST_LIFESPAN);
                out.push(Particle::spark(parent.position, velocity, colour, Some(lifespan)));
            }
            tracing::debug!(count, ?colour, "firework detonated");
        }
        ParticleKind::SuperFirework { .. } => {
            let colour = burst_colour(rng, SUPER_BURST_CHANNEL);
            let count = rng.integer_below(SUPER_BURST_COUNT);
            out.reserve(count as usize);
            for _ in 0..count {
                let velocity = parent.velocity + burst_offset(rng);
                let lifespan = rng.uniform(SUPER_BURST_LIFESPAN);
                out.push(Particle::firework(parent.position, velocity, colour, lifespan));
            }
            tracing::debug!(count, ?colour, "super firework detonated");
        }
    }
}

fn burst_colour<R: RandomSource + ?Sized>(
    rng: &mut R,
    channel: std::ops::RangeInclusive<u32>,
) -> Colour {
    let mut draw = || rng.integer(channel.clone()).min(255) as u8;
    Colour::new(draw(), draw(), draw())
}

/// Retries before falling back to straight up when the sampled direction is degenerate.
const DIRECTION_ATTEMPTS: usize = 8;

/// Random direction (from a point in the unit square) scaled to a burst speed.
pub fn burst_offset<R: RandomSource + ?Sized>(rng: &mut R) -> Vector {
    let direction = (0..DIRECTION_ATTEMPTS)
        .find_map(|_| {
            Vector::new(rng.unit() * 2.0 - 1.0, rng.unit() * 2.0 - 1.0)
                .normalised()
                .ok()
        })
        .unwrap_or(Vector::new(0.0, 1.0));
    direction * rng.uniform(BURST_SPEED)
}
