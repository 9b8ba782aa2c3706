use rand::rngs::OsRng;
use rand::Rng;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RandomError {
    #[error("upper bound must be positive, got {0}")]
    InvalidBound(usize),
}

/// Source of randomness for every component in this crate.
///
/// There is no ambient/global generator: anything that needs randomness takes
/// a device at construction, which is what makes the whole pipeline
/// reproducible in tests (see `test_utils`).
pub trait RandomDevice {
    /// Uniform value in `[0, 1)`.
    fn rand(&mut self) -> f64;

    /// Uniform integer in `[0, bound)`.
    fn rand_below(&mut self, bound: usize) -> Result<usize, RandomError>;
}

/// Production device, backed by the OS CSPRNG.
///
/// The generated phrases double as password material, so a seeded
/// pseudo-RNG is not acceptable here.
#[derive(Debug, Clone, Copy, Default)]
pub struct CryptoRand;

impl RandomDevice for CryptoRand {
    fn rand(&mut self) -> f64 {
        OsRng.gen::<f64>()
    }

    fn rand_below(&mut self, bound: usize) -> Result<usize, RandomError> {
        if bound == 0 {
            return Err(RandomError::InvalidBound(bound));
        }
        Ok(OsRng.gen_range(0..bound))
    }
}

/// Pick a uniformly random element of a non-empty slice.
pub(crate) fn pick<'a, T>(rng: &mut dyn RandomDevice, items: &'a [T]) -> &'a T {
    // All tables this is called with are non-empty consts; the fallback
    // index keeps the signature infallible.
    let idx = rng.rand_below(items.len()).unwrap_or(0);
    &items[idx]
}

/// A random device paired with a probability threshold.
///
/// Crate-wide rule: an event with probability `p` happens iff a fresh draw is
/// strictly below `p`. A draw of exactly the threshold does not trigger.
pub struct ThresholdRandom {
    rng: Box<dyn RandomDevice>,
    threshold: f64,
}

impl ThresholdRandom {
    /// Out-of-range or non-finite thresholds are corrected to the 1/2
    /// default rather than rejected.
    pub fn new(rng: Box<dyn RandomDevice>, threshold: f64) -> Self {
        let threshold = if threshold.is_finite() && (0.0..=1.0).contains(&threshold) {
            threshold
        } else {
            0.5
        };
        ThresholdRandom { rng, threshold }
    }

    pub fn fifty_fifty() -> Self {
        ThresholdRandom::new(Box::new(CryptoRand), 0.5)
    }

    pub fn hits(&mut self) -> bool {
        self.rng.rand() < self.threshold
    }
}

impl Default for ThresholdRandom {
    fn default() -> Self {
        ThresholdRandom::fifty_fifty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ConstRandom;

    #[test]
    fn crypto_rand_stays_in_range() {
        let mut rng = CryptoRand;
        for _ in 0..1000 {
            let v = rng.rand();
            assert!((0.0..1.0).contains(&v));
            let i = rng.rand_below(7).unwrap();
            assert!(i < 7);
        }
    }

    #[test]
    fn rand_below_zero_is_invalid() {
        let mut rng = CryptoRand;
        assert_eq!(rng.rand_below(0), Err(RandomError::InvalidBound(0)));
    }

    #[test]
    fn threshold_is_a_strict_inequality() {
        // Exactly the threshold: no hit.
        let mut at = ThresholdRandom::new(Box::new(ConstRandom::new(0.5)), 0.5);
        for _ in 0..100 {
            assert!(!at.hits());
        }
        // Just below: always hits.
        let mut below = ThresholdRandom::new(Box::new(ConstRandom::new(0.5 - f64::EPSILON)), 0.5);
        for _ in 0..100 {
            assert!(below.hits());
        }
    }

    #[test]
    fn bad_thresholds_fall_back_to_half() {
        for bad in [f64::NAN, f64::INFINITY, -0.2, 1.5] {
            let mut t = ThresholdRandom::new(Box::new(ConstRandom::new(0.49)), bad);
            assert!(t.hits());
            let mut t = ThresholdRandom::new(Box::new(ConstRandom::new(0.51)), bad);
            assert!(!t.hits());
        }
    }
}
