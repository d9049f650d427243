//! Simulation engine — the core of the display.
//!
//! `FireworksEngine` owns the particle collection and the RNG, runs the
//! systems once per tick, and produces `FrameSnapshot`s and `RenderBatch`es.
//! Completely headless, so a fixed seed replays a run exactly.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use fireworks_core::constants::{GRAVITY, LAUNCH_PROBABILITY};
use fireworks_core::state::{FrameSnapshot, FrameStats, RenderBatch};
use fireworks_core::types::{SimTime, Vector};
use fireworks_core::viewport::Viewport;

use crate::particle::Particle;
use crate::systems;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// World acceleration applied every tick.
    pub acceleration: Vector,
    /// Chance per tick of a new launch.
    pub launch_probability: f64,
    /// Whether to start with a random handful of fireworks in the air.
    pub initial_population: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: None,
            acceleration: GRAVITY,
            launch_probability: LAUNCH_PROBABILITY,
            initial_population: true,
        }
    }
}

/// ChaCha stream used for render-time flicker, apart from the sim's stream 0.
const RENDER_STREAM: u64 = 1;

/// The simulation engine. Owns the particles and all sim state.
pub struct FireworksEngine {
    particles: Vec<Particle>,
    rng: ChaCha8Rng,
    /// Flicker draws for snapshots and render batches. Never touched by `tick`,
    /// so rendering cannot change how a seeded run unfolds.
    render_rng: ChaCha8Rng,
    time: SimTime,
    viewport: Viewport,
    acceleration: Vector,
    launch_probability: f64,
    last_stats: FrameStats,
}

impl FireworksEngine {
    /// Create an engine for `viewport`, populated per `config`.
    pub fn new(config: SimConfig, viewport: Viewport) -> Self {
        let (mut rng, mut render_rng) = match config.seed {
            Some(seed) => (
                ChaCha8Rng::seed_from_u64(seed),
                ChaCha8Rng::seed_from_u64(seed),
            ),
            None => (ChaCha8Rng::from_entropy(), ChaCha8Rng::from_entropy()),
        };
        render_rng.set_stream(RENDER_STREAM);
        let particles = if config.initial_population {
            systems::launch::initial_population(&mut rng)
        } else {
            Vec::new()
        };
        tracing::debug!(
            seed = ?config.seed,
            initial = particles.len(),
            "simulation started"
        );

        let time = SimTime::default();
        Self {
            last_stats: FrameStats::new(time, particles.len(), 0.0, viewport),
            particles,
            rng,
            render_rng,
            time,
            viewport,
            acceleration: config.acceleration,
            launch_probability: config.launch_probability,
        }
    }

    /// Advance the simulation by `dt` seconds against the current window size.
    ///
    /// Every particle is updated and the results flattened into a new
    /// collection; then the launch policy may add one firework.
    pub fn tick(&mut self, dt: f64, viewport: Viewport) -> FrameStats {
        self.viewport = viewport;

        let particles = std::mem::take(&mut self.particles);
        self.particles = systems::step(
            particles,
            dt,
            self.acceleration,
            &self.viewport,
            &mut self.rng,
        );
        let launched = systems::launch::maybe_launch(
            &mut self.rng,
            self.launch_probability,
            &mut self.particles,
        );

        self.time.advance(dt);

        let mut stats = FrameStats::new(self.time, self.particles.len(), dt, self.viewport);
        stats.launched = launched;
        self.last_stats = stats;
        stats
    }

    /// Everything the renderer needs to draw the current frame.
    pub fn snapshot(&mut self) -> FrameSnapshot {
        FrameSnapshot {
            stats: self.last_stats,
            particles: systems::render::build_views(&self.particles, &mut self.render_rng),
        }
    }

    /// Triangle-list buffers for the current frame.
    pub fn render_batch(&mut self) -> RenderBatch {
        systems::render::build_batch(&self.particles, &self.viewport, &mut self.render_rng)
    }

    /// Add a particle to the collection (picked up by the next tick).
    pub fn spawn(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Stats from the most recent tick.
    pub fn stats(&self) -> FrameStats {
        self.last_stats
    }
}
