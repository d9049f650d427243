//! Core types and definitions for the fireworks simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! vectors, colours, the viewport, frame snapshots, errors and constants.
//! It has no randomness and no dependency on any runtime.

pub mod colour;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;
pub mod viewport;

pub use colour::Colour;
pub use error::VectorError;
pub use types::{SimTime, Vector};
pub use viewport::Viewport;
