//! Deterministic [`RandomDevice`] implementations for tests.
//!
//! Public on purpose so integration tests (and downstream users who want
//! reproducible output) can inject them anywhere a device is accepted.

use crate::random::{RandomDevice, RandomError};

/// Always returns the same ratio; `rand_below` always returns a fixed index
/// (clamped to the bound).
#[derive(Debug, Clone, Copy)]
pub struct ConstRandom {
    ratio: f64,
    index: usize,
}

impl ConstRandom {
    pub fn new(ratio: f64) -> Self {
        ConstRandom { ratio, index: 0 }
    }

    pub fn with_index(ratio: f64, index: usize) -> Self {
        ConstRandom { ratio, index }
    }
}

impl RandomDevice for ConstRandom {
    fn rand(&mut self) -> f64 {
        self.ratio
    }

    fn rand_below(&mut self, bound: usize) -> Result<usize, RandomError> {
        if bound == 0 {
            return Err(RandomError::InvalidBound(bound));
        }
        Ok(self.index.min(bound - 1))
    }
}

/// Replays a fixed sequence of ratios, then repeats it.
///
/// `rand_below` consumes from the same sequence, scaling the ratio into the
/// requested range, so a single script drives both contract methods.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    pos: usize,
}

impl SequenceRandom {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "sequence must not be empty");
        SequenceRandom { values, pos: 0 }
    }

    fn next(&mut self) -> f64 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

impl RandomDevice for SequenceRandom {
    fn rand(&mut self) -> f64 {
        self.next()
    }

    fn rand_below(&mut self, bound: usize) -> Result<usize, RandomError> {
        if bound == 0 {
            return Err(RandomError::InvalidBound(bound));
        }
        let idx = (self.next() * bound as f64) as usize;
        Ok(idx.min(bound - 1))
    }
}
