//! Frame loop — ticks the engine at the configured rate and hands each
//! frame to a sink.
//!
//! `dt` is the measured wall-clock time since the previous frame, so a slow
//! frame advances the simulation further rather than slowing it down.

use std::io;
use std::time::{Duration, Instant};

use fireworks_core::state::FrameStats;
use fireworks_core::viewport::Viewport;
use fireworks_sim::FireworksEngine;

use crate::config::RunnerConfig;
use crate::sink::FrameSink;

/// Advance one frame and present it.
pub fn run_frame(
    engine: &mut FireworksEngine,
    sink: &mut dyn FrameSink,
    dt: f64,
    viewport: Viewport,
) -> io::Result<FrameStats> {
    let stats = engine.tick(dt, viewport);
    sink.present(engine, &stats)?;
    Ok(stats)
}

/// Run until `config.frames` frames have been presented (forever when 0),
/// or the sink fails. Returns the number of frames run.
pub fn run(config: &RunnerConfig, sink: &mut dyn FrameSink) -> io::Result<u64> {
    let mut engine = FireworksEngine::new(config.sim_config(), config.viewport);
    let tick_duration = config.tick_duration();

    tracing::info!(
        seed = ?config.seed,
        width = config.viewport.width,
        height = config.viewport.height,
        tick_rate = config.tick_rate,
        initial = engine.particles().len(),
        "fireworks started"
    );

    let mut frames = 0u64;
    let mut last_frame = Instant::now();
    let mut next_tick_time = last_frame;

    while config.frames == 0 || frames < config.frames {
        let now = Instant::now();
        let dt = now.duration_since(last_frame).as_secs_f64();
        last_frame = now;

        run_frame(&mut engine, sink, dt, config.viewport)?;
        frames += 1;

        next_tick_time = pace(next_tick_time, tick_duration);
    }

    tracing::info!(
        frames,
        elapsed_secs = engine.time().elapsed_secs,
        particles = engine.particles().len(),
        "fireworks finished"
    );
    Ok(frames)
}

/// Sleep until the next frame deadline and return it. When more than two
/// frames behind, the deadline resets to now instead of catching up.
fn pace(next_tick_time: Instant, tick_duration: Duration) -> Instant {
    let mut next_tick_time = next_tick_time + tick_duration;
    let now = Instant::now();
    if next_tick_time > now {
        std::thread::sleep(next_tick_time - now);
    } else if now - next_tick_time > tick_duration * 2 {
        tracing::debug!(behind = ?(now - next_tick_time), "frame clock reset");
        next_tick_time = now;
    }
    next_tick_time
}
