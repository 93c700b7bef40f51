use crate::config::ShowcaseConfig;
use crate::core::algorithms::{
    factorial, fibonacci, is_palindrome, is_prime, max_vector, primes_up_to, reverse_string,
    sum_vector,
};
use crate::core::display::format_line;
use crate::core::{Demo, DemoSummary};
use crate::utils::error::Result;
use std::io::Write;

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}

/// Prints one result line per textbook algorithm.
#[derive(Debug, Clone, Default)]
pub struct AlgorithmShowcase {
    config: ShowcaseConfig,
}

impl AlgorithmShowcase {
    pub fn new(config: ShowcaseConfig) -> Self {
        Self { config }
    }
}

impl Demo for AlgorithmShowcase {
    fn name(&self) -> &str {
        "algo-showcase"
    }

    fn run(&mut self, out: &mut dyn Write) -> Result<DemoSummary> {
        let cfg = &self.config;
        let mut lines = 0;

        writeln!(
            out,
            "Factorial of {}: {}",
            cfg.factorial_input,
            factorial(cfg.factorial_input)
        )?;
        lines += 1;

        writeln!(
            out,
            "Is {} prime? {}",
            cfg.prime_candidate,
            yes_no(is_prime(cfg.prime_candidate))
        )?;
        lines += 1;

        writeln!(
            out,
            "Reversed string of '{}': {}",
            cfg.reverse_input,
            reverse_string(&cfg.reverse_input)
        )?;
        lines += 1;

        writeln!(out, "Sum of vector: {}", sum_vector(&cfg.numbers))?;
        writeln!(out, "Max of vector: {}", max_vector(&cfg.numbers)?)?;
        writeln!(out, "Vector elements: {}", format_line(&cfg.numbers))?;
        lines += 3;

        let fib = fibonacci(cfg.fibonacci_terms)?;
        writeln!(
            out,
            "Fibonacci sequence up to {} terms: {}",
            cfg.fibonacci_terms,
            format_line(&fib)
        )?;
        lines += 1;

        writeln!(
            out,
            "Primes up to {}: {}",
            cfg.prime_limit,
            format_line(&primes_up_to(cfg.prime_limit))
        )?;
        lines += 1;

        writeln!(
            out,
            "Is '{}' a palindrome? {}",
            cfg.palindrome_input,
            yes_no(is_palindrome(&cfg.palindrome_input))
        )?;
        lines += 1;

        tracing::debug!("Showcase printed {} results", lines);
        Ok(DemoSummary::new(self.name(), lines))
    }
}
