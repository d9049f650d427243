//! Fireworks runner.
//!
//! Wires the simulation engine to a frame clock and a frame sink. The sink
//! stands in for the windowing/rendering layer, which lives outside this
//! workspace.

pub mod config;
pub mod game_loop;
pub mod sink;
