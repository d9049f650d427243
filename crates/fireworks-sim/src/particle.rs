//! The particle entity and its per-tick update.
//!
//! All three behaviours share one struct; `kind` selects the update and
//! colour rules. Only fireworks carry a spark timer.

use serde::{Deserialize, Serialize};

use fireworks_core::colour::Colour;
use fireworks_core::constants::{FLICKER_FACTOR, FLICKER_GOLD};
use fireworks_core::enums::EntityKind;
use fireworks_core::types::Vector;
use fireworks_core::viewport::Viewport;

use crate::random::RandomSource;
use crate::systems::{cleanup, detonation, movement, trail};

/// Behaviour tag plus the state only that behaviour needs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ParticleKind {
    Spark,
    Firework {
        /// Seconds since the last trail spark.
        last_spark: f64,
    },
    SuperFirework {
        /// Seconds since the last trail spark.
        last_spark: f64,
    },
}

impl ParticleKind {
    pub fn entity_kind(&self) -> EntityKind {
        match self {
            ParticleKind::Spark => EntityKind::Spark,
            ParticleKind::Firework { .. } => EntityKind::Firework,
            ParticleKind::SuperFirework { .. } => EntityKind::SuperFirework,
        }
    }

    /// Fresh tag for `kind`, with a zeroed spark timer.
    pub fn fresh(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Spark => ParticleKind::Spark,
            EntityKind::Firework => ParticleKind::Firework { last_spark: 0.0 },
            EntityKind::SuperFirework => ParticleKind::SuperFirework { last_spark: 0.0 },
        }
    }

    pub fn last_spark(&self) -> Option<f64> {
        match *self {
            ParticleKind::Spark => None,
            ParticleKind::Firework { last_spark } | ParticleKind::SuperFirework { last_spark } => {
                Some(last_spark)
            }
        }
    }

    pub(crate) fn last_spark_mut(&mut self) -> Option<&mut f64> {
        match self {
            ParticleKind::Spark => None,
            ParticleKind::Firework { last_spark } | ParticleKind::SuperFirework { last_spark } => {
                Some(last_spark)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub position: Vector,
    /// World units per second.
    pub velocity: Vector,
    /// Undamped colour. Fireworks store it but render with flicker-gold.
    pub base_colour: Colour,
    /// Total time to live in seconds; `None` lives until it leaves the screen.
    pub lifespan: Option<f64>,
    /// Seconds since creation.
    pub age: f64,
    pub kind: ParticleKind,
}

impl Particle {
    pub fn new(
        kind: EntityKind,
        position: Vector,
        velocity: Vector,
        base_colour: Colour,
        lifespan: Option<f64>,
    ) -> Self {
        Self {
            position,
            velocity,
            base_colour,
            lifespan,
            age: 0.0,
            kind: ParticleKind::fresh(kind),
        }
    }

    pub fn spark(position: Vector, velocity: Vector, colour: Colour, lifespan: Option<f64>) -> Self {
        Self::new(EntityKind::Spark, position, velocity, colour, lifespan)
    }

    pub fn firework(position: Vector, velocity: Vector, colour: Colour, lifespan: f64) -> Self {
        Self::new(EntityKind::Firework, position, velocity, colour, Some(lifespan))
    }

    pub fn super_firework(position: Vector, velocity: Vector, colour: Colour, lifespan: f64) -> Self {
        Self::new(
            EntityKind::SuperFirework,
            position,
            velocity,
            colour,
            Some(lifespan),
        )
    }

    pub fn entity_kind(&self) -> EntityKind {
        self.kind.entity_kind()
    }

    /// Fraction of life left, `1 - age / lifespan`, clamped to [0, 1].
    /// `None` for immortal particles; zero for a non-positive lifespan.
    pub fn remaining_life(&self) -> Option<f64> {
        let lifespan = self.lifespan?;
        if lifespan <= 0.0 {
            return Some(0.0);
        }
        Some((1.0 - self.age / lifespan).clamp(0.0, 1.0))
    }

    /// Colour to draw this frame.
    ///
    /// Sparks fade toward black over their lifespan. Fireworks flicker: every
    /// call draws a new brightness, so two reads in one tick may differ.
    pub fn colour<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Colour {
        match self.kind {
            ParticleKind::Spark => self.faded_colour(),
            ParticleKind::Firework { .. } | ParticleKind::SuperFirework { .. } => flicker_gold(rng),
        }
    }

    /// Base colour faded by remaining life.
    pub fn faded_colour(&self) -> Colour {
        match self.remaining_life() {
            Some(remaining) => self.base_colour.faded(remaining),
            None => self.base_colour,
        }
    }

    /// Advance one tick and return whatever replaces this particle.
    pub fn update<R: RandomSource + ?Sized>(
        self,
        dt: f64,
        acceleration: Vector,
        viewport: &Viewport,
        rng: &mut R,
    ) -> Vec<Particle> {
        let mut out = Vec::new();
        self.advance(dt, acceleration, viewport, rng, &mut out);
        out
    }

    /// [`Particle::update`], appending results to `out`.
    ///
    /// Survivors are pushed first, followed by any trail spark. A firework that
    /// fails its survival check is replaced by its detonation burst.
    pub fn advance<R: RandomSource + ?Sized>(
        mut self,
        dt: f64,
        acceleration: Vector,
        viewport: &Viewport,
        rng: &mut R,
        out: &mut Vec<Particle>,
    ) {
        let alive = self.step_motion(dt, acceleration, viewport);

        match self.kind {
            ParticleKind::Spark => {
                if alive {
                    out.push(self);
                }
            }
            ParticleKind::Firework { .. } | ParticleKind::SuperFirework { .. } => {
                if let Some(timer) = self.kind.last_spark_mut() {
                    *timer += dt;
                }

                if !alive {
                    detonation::detonate(&self, rng, out);
                    return;
                }

                let spark = trail::emit(&mut self, rng);
                out.push(self);
                out.extend(spark);
            }
        }
    }

    /// Age, integrate, then check bounds and lifespan. Returns survival.
    fn step_motion(&mut self, dt: f64, acceleration: Vector, viewport: &Viewport) -> bool {
        self.age += dt;
        movement::integrate(&mut self.position, &mut self.velocity, acceleration, dt);
        cleanup::survives(self, viewport)
    }
}

/// Gold tone with a fresh brightness factor in [0.8, 1.2).
pub fn flicker_gold<R: RandomSource + ?Sized>(rng: &mut R) -> Colour {
    FLICKER_GOLD.scaled(rng.uniform(FLICKER_FACTOR))
}
