//! Enumerations shared across crates.

use serde::{Deserialize, Serialize};

/// Which behaviour a particle follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EntityKind {
    /// Plain particle: falls, fades, expires.
    #[default]
    Spark,
    /// Ascends trailing sparks, bursts into sparks.
    Firework,
    /// Ascends trailing sparks, bursts into fireworks.
    SuperFirework,
}

impl EntityKind {
    /// Whether this kind detonates when its survival check fails.
    pub fn detonates(self) -> bool {
        matches!(self, EntityKind::Firework | EntityKind::SuperFirework)
    }
}
