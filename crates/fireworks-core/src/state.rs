//! Frame state handed to the rendering layer after each tick.

use serde::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::constants::FPS_SENTINEL;
use crate::enums::EntityKind;
use crate::types::{SimTime, Vector};
use crate::viewport::Viewport;

/// Per-frame statistics shown in the overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameStats {
    pub time: SimTime,
    pub particle_count: usize,
    /// Duration of the tick that produced this frame (seconds).
    pub dt: f64,
    pub width: u32,
    pub height: u32,
    /// Whether the launch policy fired this tick.
    pub launched: bool,
}

impl FrameStats {
    pub fn new(time: SimTime, particle_count: usize, dt: f64, viewport: Viewport) -> Self {
        Self {
            time,
            particle_count,
            dt,
            width: viewport.width,
            height: viewport.height,
            launched: false,
        }
    }

    /// Instantaneous frame rate, or the sentinel when `dt` is zero.
    pub fn fps(&self) -> f64 {
        if self.dt == 0.0 {
            FPS_SENTINEL
        } else {
            1.0 / self.dt
        }
    }

    /// Overlay text, e.g. `1,234 particles, 60fps, 640x480`.
    pub fn label(&self) -> String {
        format!(
            "{} particles, {:.0}fps, {}x{}",
            group_thousands(self.particle_count),
            self.fps(),
            self.width,
            self.height
        )
    }
}

/// A single particle as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleView {
    pub kind: EntityKind,
    pub position: Vector,
    pub colour: Colour,
}

/// Complete visible state after a tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub stats: FrameStats,
    pub particles: Vec<ParticleView>,
}

/// Flat triangle-list buffers: 6 screen coordinates and 9 colour bytes per particle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderBatch {
    pub vertices: Vec<f32>,
    pub colours: Vec<u8>,
}

impl RenderBatch {
    pub const FLOATS_PER_PARTICLE: usize = 6;
    pub const BYTES_PER_PARTICLE: usize = 9;

    pub fn with_capacity(particles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(particles * Self::FLOATS_PER_PARTICLE),
            colours: Vec::with_capacity(particles * Self::BYTES_PER_PARTICLE),
        }
    }

    /// Number of vertices in the batch (three per particle).
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

/// `1234567` -> `"1,234,567"`.
fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
