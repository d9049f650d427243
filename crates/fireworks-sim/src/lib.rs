//! Simulation engine for the fireworks display.
//!
//! Owns the particle collection and the random source, advances the
//! collection once per tick, and produces frame snapshots and render
//! batches for whatever draws them.

pub mod engine;
pub mod particle;
pub mod random;
pub mod systems;

pub use engine::{FireworksEngine, SimConfig};
pub use fireworks_core as core;
pub use particle::{Particle, ParticleKind};
pub use random::{RandomSource, SequenceRandom};

#[cfg(test)]
mod tests;
