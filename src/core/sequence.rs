use crate::core::{display, sort, stats};
use crate::utils::error::{AlgoError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Exclusive upper bound of generated values.
pub const DEFAULT_UPPER_BOUND: i32 = 1000;

/// A fixed-length sequence of signed integers, mutated in place only by [`IntSequence::sort`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntSequence {
    values: Vec<i32>,
}

impl IntSequence {
    pub fn new(values: Vec<i32>) -> Self {
        Self { values }
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn max(&self) -> Result<i32> {
        stats::max(&self.values)
    }

    pub fn min(&self) -> Result<i32> {
        stats::min(&self.values)
    }

    pub fn average(&self) -> Result<f64> {
        stats::average(&self.values)
    }

    pub fn sum(&self) -> i64 {
        stats::sum(&self.values)
    }

    pub fn sort(&mut self) {
        sort::exchange_sort(&mut self.values);
    }

    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    pub fn display(&self, per_line: usize) -> String {
        display::format_wrapped(&self.values, per_line)
    }

    pub fn into_inner(self) -> Vec<i32> {
        self.values
    }
}

impl From<Vec<i32>> for IntSequence {
    fn from(values: Vec<i32>) -> Self {
        Self::new(values)
    }
}

/// Produces [`IntSequence`]s from an injectable random source.
#[derive(Debug, Clone)]
pub struct SequenceGenerator<R> {
    rng: R,
    upper_bound: i32,
}

impl<R: Rng> SequenceGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            upper_bound: DEFAULT_UPPER_BOUND,
        }
    }

    /// Values are drawn from `[0, upper_bound)`.
    pub fn with_upper_bound(mut self, upper_bound: i32) -> Result<Self> {
        if upper_bound <= 0 {
            return Err(AlgoError::InvalidConfigValueError {
                field: "array.upper_bound".to_string(),
                value: upper_bound.to_string(),
                reason: "Upper bound must be positive".to_string(),
            });
        }
        self.upper_bound = upper_bound;
        Ok(self)
    }

    pub fn upper_bound(&self) -> i32 {
        self.upper_bound
    }

    pub fn generate(&mut self, len: usize) -> IntSequence {
        let values = (0..len)
            .map(|_| self.rng.random_range(0..self.upper_bound))
            .collect();
        tracing::debug!("Generated {} values in [0, {})", len, self.upper_bound);
        IntSequence::new(values)
    }
}

impl SequenceGenerator<StdRng> {
    pub fn with_seed(seed: u64) -> Self {
        tracing::debug!("Seeding sequence generator with {}", seed);
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeds from the wall clock truncated to whole seconds, so two runs
    /// within the same second produce the same sequence.
    pub fn from_clock() -> Self {
        Self::with_seed(clock_seed())
    }
}

pub fn clock_seed() -> u64 {
    chrono::Utc::now().timestamp().unsigned_abs()
}
