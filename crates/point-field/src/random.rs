//! Injectable uniform random sources
//!
//! Generators draw every random value through [`RandomSource`], so tests can
//! pin exact outputs while applications pass any `rand` generator.

use rand::Rng;

/// A source of uniformly distributed floats.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next_uniform(&mut self) -> f32;

    /// Next value in `[lo, hi)`.
    fn uniform_range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + self.next_uniform() * (hi - lo)
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_uniform(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Always returns the same value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConstantSource(pub f32);

impl RandomSource for ConstantSource {
    fn next_uniform(&mut self) -> f32 {
        self.0
    }
}

/// Cycles through a fixed list of values, starting over when exhausted.
#[derive(Clone, Debug)]
pub struct SequenceSource {
    values: Vec<f32>,
    cursor: usize,
}

impl SequenceSource {
    /// An empty list behaves like a constant zero source.
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }
}

impl RandomSource for SequenceSource {
    fn next_uniform(&mut self) -> f32 {
        if self.values.is_empty() {
            return 0.0;
        }

        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}
