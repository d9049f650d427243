//! Random source used by every stochastic decision in the simulation.
//!
//! Anything implementing [`rand::Rng`] is a random source. Tests that need
//! exact control over draws use [`SequenceRandom`].

use std::ops::{Range, RangeInclusive};

use rand::Rng;

pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// Uniform integer in the inclusive `range`.
    fn integer(&mut self, range: RangeInclusive<u32>) -> u32;

    /// Uniform float in the half-open `range`.
    fn uniform(&mut self, range: Range<f64>) -> f64 {
        range.start + self.unit() * (range.end - range.start)
    }

    /// Uniform integer in the half-open `range`. An empty range yields its start.
    fn integer_below(&mut self, range: Range<u32>) -> u32 {
        if range.end <= range.start {
            return range.start;
        }
        self.integer(range.start..=range.end - 1)
    }

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.unit() < p
    }
}

impl<R: Rng> RandomSource for R {
    fn unit(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn integer(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.gen_range(range)
    }

    fn uniform(&mut self, range: Range<f64>) -> f64 {
        if range.is_empty() {
            return range.start;
        }
        self.gen_range(range)
    }

    fn chance(&mut self, p: f64) -> bool {
        if p.is_nan() {
            return false;
        }
        self.gen_bool(p.clamp(0.0, 1.0))
    }
}

/// Replays a fixed cycle of unit draws.
///
/// Integer draws map the next unit value onto the requested range, so a
/// value of `0.0` always picks the lowest integer and `0.999` the highest.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    /// Values outside `[0, 1)` are clamped into it. An empty list behaves like `[0.0]`.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let mut values: Vec<f64> = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        if values.is_empty() {
            values.push(0.0);
        }
        Self { values, cursor: 0 }
    }

    /// Always draws `value`.
    pub fn constant(value: f64) -> Self {
        Self::new([value])
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }

    fn integer(&mut self, range: RangeInclusive<u32>) -> u32 {
        let (start, end) = (*range.start(), *range.end());
        if end <= start {
            return start;
        }
        let span = (end - start) as f64 + 1.0;
        let offset = (self.unit() * span).floor() as u32;
        start + offset.min(end - start)
    }
}
