//! Frame sinks: where each finished frame goes.
//!
//! A real renderer would upload the render batch and draw the overlay
//! label. The sinks here log the overlay or stream snapshots as JSON lines.

use std::io::{self, Write};

use fireworks_core::state::FrameStats;
use fireworks_sim::FireworksEngine;

/// Consumes one frame after each tick.
pub trait FrameSink {
    fn present(&mut self, engine: &mut FireworksEngine, stats: &FrameStats) -> io::Result<()>;
}

/// Builds the triangle batch like a renderer would and logs the overlay
/// label every `every` frames.
#[derive(Debug)]
pub struct LogSink {
    every: u64,
    frames: u64,
}

impl LogSink {
    pub fn new(every: u64) -> Self {
        Self {
            every: every.max(1),
            frames: 0,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameSink for LogSink {
    fn present(&mut self, engine: &mut FireworksEngine, stats: &FrameStats) -> io::Result<()> {
        let batch = engine.render_batch();
        self.frames += 1;

        if self.frames % self.every == 0 {
            tracing::info!(
                tick = stats.time.tick,
                vertices = batch.vertex_count(),
                launched = stats.launched,
                "{}",
                stats.label()
            );
        }
        Ok(())
    }
}

/// Writes one `FrameSnapshot` JSON object per line.
pub struct JsonLinesSink<W: Write> {
    writer: W,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FrameSink for JsonLinesSink<W> {
    fn present(&mut self, engine: &mut FireworksEngine, _stats: &FrameStats) -> io::Result<()> {
        let snapshot = engine.snapshot();
        serde_json::to_writer(&mut self.writer, &snapshot)?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()
    }
}
