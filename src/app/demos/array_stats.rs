use crate::config::ArrayConfig;
use crate::core::sequence::{clock_seed, SequenceGenerator};
use crate::core::{Demo, DemoSummary};
use crate::utils::error::Result;
use rand::rngs::StdRng;
use rand::Rng;
use std::io::Write;

/// Generates a random integer sequence, reports max/min/average, sorts it
/// and prints the before and after views.
pub struct ArrayStatsDemo<R> {
    generator: SequenceGenerator<R>,
    size: usize,
    per_line: usize,
}

impl<R: Rng> ArrayStatsDemo<R> {
    pub fn new(generator: SequenceGenerator<R>, size: usize, per_line: usize) -> Self {
        Self {
            generator,
            size,
            per_line,
        }
    }
}

impl ArrayStatsDemo<StdRng> {
    /// Uses the configured seed, or the wall clock when none is set.
    pub fn from_config(config: &ArrayConfig) -> Result<Self> {
        let seed = config.seed.unwrap_or_else(clock_seed);
        tracing::debug!("Array demo seed: {}", seed);

        let generator = SequenceGenerator::with_seed(seed).with_upper_bound(config.upper_bound)?;
        Ok(Self::new(generator, config.size, config.per_line))
    }
}

impl<R: Rng> Demo for ArrayStatsDemo<R> {
    fn name(&self) -> &str {
        "array-stats"
    }

    fn run(&mut self, out: &mut dyn Write) -> Result<DemoSummary> {
        let mut numbers = self.generator.generate(self.size);

        writeln!(out, "Original Array:")?;
        write!(out, "{}", numbers.display(self.per_line))?;

        // 統計值必須在排序前計算完成
        let max = numbers.max()?;
        let min = numbers.min()?;
        let average = numbers.average()?;
        writeln!(out, "\nMaximum Value: {}", max)?;
        writeln!(out, "Minimum Value: {}", min)?;
        writeln!(out, "Average Value: {:.2}", average)?;

        numbers.sort();
        tracing::debug!("Sorted {} values", numbers.len());

        writeln!(out, "\nSorted Array:")?;
        write!(out, "{}", numbers.display(self.per_line))?;

        Ok(DemoSummary::new(self.name(), numbers.len() * 2))
    }
}
