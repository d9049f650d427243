//! Simulation constants and tuning parameters.

use std::ops::{Range, RangeInclusive};

use crate::colour::Colour;
use crate::enums::EntityKind;
use crate::types::Vector;

/// Constant world acceleration applied to every particle.
pub const GRAVITY: Vector = Vector::new(0.0, -0.1);

/// Half-size of a rendered particle triangle, in world units.
pub const TRIANGLE_SIZE: f64 = 0.0025;

// --- Viewport / frame clock ---

pub const DEFAULT_VIEWPORT_WIDTH: u32 = 640;
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 480;

/// Default frame rate of the runner (Hz).
pub const DEFAULT_TICK_RATE: u32 = 60;

/// Shown in place of the frame rate when a frame took no time.
pub const FPS_SENTINEL: f64 = 999.0;

// --- Launch policy ---

/// Chance per tick that a new firework is launched.
pub const LAUNCH_PROBABILITY: f64 = 0.1;

/// Variants drawn uniformly at launch (fireworks weighted 2:1).
pub const LAUNCH_POOL: [EntityKind; 3] = [
    EntityKind::Firework,
    EntityKind::Firework,
    EntityKind::SuperFirework,
];

pub const LAUNCH_X: Range<f64> = -0.75..0.75;
pub const LAUNCH_VELOCITY_X: Range<f64> = -0.05..0.05;
pub const LAUNCH_VELOCITY_Y: Range<f64> = 0.25..0.50;

/// Whole seconds a launched firework ascends before detonating.
pub const LAUNCH_LIFESPAN_SECS: Range<u32> = 1..5;

pub const LAUNCH_COLOUR: Colour = Colour::WHITE;

/// Number of fireworks in the sky at startup.
pub const INITIAL_LAUNCHES: Range<u32> = 5..20;

// --- Trail sparks ---

/// Spark interval is this many seconds per 100 units of speed.
pub const SPARK_INTERVAL_FACTOR: f64 = 0.125;
pub const SPARK_SPEED_DIVISOR: f64 = 100.0;

/// Sparks drift backward along the flight path at this speed.
pub const SPARK_SPEED: f64 = 0.2;
pub const SPARK_LIFESPAN: Range<f64> = 0.0..2.0;

// --- Flicker ---

pub const FLICKER_GOLD: Colour = Colour::new(250, 209, 70);
pub const FLICKER_FACTOR: Range<f64> = 0.8..1.2;

// --- Detonation ---

/// Magnitude of the random velocity kick given to burst children.
pub const BURST_SPEED: Range<f64> = 0.05..0.20;

pub const FIREWORK_BURST_COUNT: RangeInclusive<u32> = 25..=100;
pub const FIREWORK_BURST_CHANNEL: RangeInclusive<u32> = 0..=255;
pub const FIREWORK_BURST_LIFESPAN: Range<f64> = 2.0..12.0;

pub const SUPER_BURST_COUNT: Range<u32> = 5..10;
pub const SUPER_BURST_CHANNEL: RangeInclusive<u32> = 100..=255;
pub const SUPER_BURST_LIFESPAN: Range<f64> = 1.0..4.0;
