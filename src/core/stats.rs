//! Descriptive statistics over integer slices.
//!
//! Empty input is reported as [`AlgoError::EmptyInput`] rather than a garbage value.

use crate::utils::error::{AlgoError, Result};

pub fn max(values: &[i32]) -> Result<i32> {
    values
        .iter()
        .copied()
        .max()
        .ok_or(AlgoError::EmptyInput { operation: "max" })
}

pub fn min(values: &[i32]) -> Result<i32> {
    values
        .iter()
        .copied()
        .min()
        .ok_or(AlgoError::EmptyInput { operation: "min" })
}

/// Sum widened to `i64`; 0 for an empty slice.
pub fn sum(values: &[i32]) -> i64 {
    values.iter().map(|&v| i64::from(v)).sum()
}

pub fn average(values: &[i32]) -> Result<f64> {
    if values.is_empty() {
        return Err(AlgoError::EmptyInput {
            operation: "average",
        });
    }
    Ok(sum(values) as f64 / values.len() as f64)
}
