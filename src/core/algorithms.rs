//! Textbook algorithms exercised by the showcase demo.

use crate::core::stats;
use crate::utils::error::{AlgoError, Result};

/// Smallest `n` whose factorial carries 64 factors of two, so `n!` wraps to 0 in `u64`.
pub const FACTORIAL_WRAPS_TO_ZERO: i64 = 66;

/// Largest limit accepted for [`primes_up_to`] by config validation.
pub const MAX_PRIME_LIMIT: i64 = 1_000_000;

/// Largest term count whose Fibonacci terms all fit in `u64` (terms 0 through 93).
pub const MAX_FIBONACCI_TERMS: i64 = 94;

/// `n!` for `n >= 0`, and 1 for any `n <= 1`.
///
/// Uses native wrapping `u64` arithmetic, so results past `20!` wrap.
/// See [`checked_factorial`] for an overflow-reporting variant.
pub fn factorial(n: i64) -> u64 {
    // every larger product stays 0 once it wraps there
    if n >= FACTORIAL_WRAPS_TO_ZERO {
        return 0;
    }
    (2..=n.max(1) as u64).fold(1u64, |acc, k| acc.wrapping_mul(k))
}

pub fn checked_factorial(n: i64) -> Result<u64> {
    (2..=n.max(1) as u64).try_fold(1u64, |acc, k| {
        acc.checked_mul(k).ok_or(AlgoError::Overflow {
            operation: "factorial",
            input: n,
            limit: "u64",
        })
    })
}

/// Trial division up to the integer square root. The bound `i <= n / i`
/// is `i * i <= n` without the overflowing multiply.
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// All primes in `2..=limit`, ascending.
pub fn primes_up_to(limit: i64) -> Vec<i64> {
    (2..=limit).filter(|&n| is_prime(n)).collect()
}

pub fn reverse_string(input: &str) -> String {
    input.chars().rev().collect()
}

/// Case-sensitive, no whitespace or punctuation folding.
pub fn is_palindrome(input: &str) -> bool {
    input == reverse_string(input)
}

pub fn sum_vector(values: &[i32]) -> i64 {
    stats::sum(values)
}

pub fn max_vector(values: &[i32]) -> Result<i32> {
    stats::max(values)
}

/// The first `terms` Fibonacci numbers starting `0, 1`.
///
/// Returns an empty vector for `terms <= 0`.
pub fn fibonacci(terms: i64) -> Result<Vec<u64>> {
    if terms <= 0 {
        return Ok(Vec::new());
    }
    if terms > MAX_FIBONACCI_TERMS {
        return Err(AlgoError::Overflow {
            operation: "fibonacci",
            input: terms,
            limit: "u64",
        });
    }

    let mut fib = Vec::with_capacity(terms as usize);
    fib.push(0u64);
    if terms == 1 {
        return Ok(fib);
    }
    fib.push(1);
    for i in 2..terms as usize {
        fib.push(fib[i - 1] + fib[i - 2]);
    }
    Ok(fib)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(20), 2_432_902_008_176_640_000);
        assert_eq!(factorial(-3), 1);
    }

    #[test]
    fn test_factorial_wraps_past_u64() {
        assert_eq!(factorial(21), factorial(20).wrapping_mul(21));
        assert_ne!(factorial(21), 0);
    }

    #[test]
    fn test_factorial_wraps_to_zero_without_looping() {
        let below = (2..FACTORIAL_WRAPS_TO_ZERO as u64).fold(1u64, |acc, k| acc.wrapping_mul(k));
        assert_ne!(below, 0);
        assert_eq!(factorial(FACTORIAL_WRAPS_TO_ZERO - 1), below);
        assert_eq!(factorial(FACTORIAL_WRAPS_TO_ZERO), 0);
        assert_eq!(factorial(1_000_000_000_000), 0);
        assert_eq!(factorial(i64::MAX), 0);
    }

    #[test]
    fn test_checked_factorial() {
        assert_eq!(checked_factorial(5).unwrap(), 120);
        assert_eq!(checked_factorial(20).unwrap(), factorial(20));
        let err = checked_factorial(21).unwrap_err();
        assert!(matches!(
            err,
            AlgoError::Overflow {
                operation: "factorial",
                input: 21,
                ..
            }
        ));
    }

    #[test]
    fn test_is_prime() {
        assert!(is_prime(2));
        assert!(is_prime(7));
        assert!(!is_prime(1));
        assert!(!is_prime(4));
        assert!(!is_prime(0));
        assert!(!is_prime(-7));
    }

    #[test]
    fn test_is_prime_perfect_squares() {
        for p in [2i64, 3, 5, 7, 11, 13, 97, 1009] {
            assert!(!is_prime(p * p), "{} should be composite", p * p);
        }
        assert!(is_prime(1_000_000_007));
    }

    #[test]
    fn test_is_prime_near_i64_max() {
        // 2^63 - 1 = 7^2 * 73 * 127 * 337 * 92737 * 649657
        assert!(!is_prime(i64::MAX));
    }

    #[test]
    fn test_primes_up_to() {
        assert_eq!(
            primes_up_to(50),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47]
        );
        assert!(primes_up_to(1).is_empty());
    }

    #[test]
    fn test_reverse_string() {
        assert_eq!(reverse_string("hello"), "olleh");
        assert_eq!(reverse_string(""), "");
        assert_eq!(reverse_string("añb"), "bña");
        for s in ["hello", "radar", "Rust 2021", ""] {
            assert_eq!(reverse_string(&reverse_string(s)), s);
        }
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome("radar"));
        assert!(!is_palindrome("hello"));
        assert!(is_palindrome(""));
        assert!(!is_palindrome("Radar"));
        assert!(!is_palindrome("a man a plan"));
    }

    #[test]
    fn test_vector_sum_and_max() {
        assert_eq!(sum_vector(&[1, 2, 3, 4, 5]), 15);
        assert_eq!(max_vector(&[1, 2, 3, 4, 5]).unwrap(), 5);
        assert_eq!(sum_vector(&[]), 0);
        assert!(max_vector(&[]).is_err());
    }

    #[test]
    fn test_fibonacci() {
        assert_eq!(fibonacci(10).unwrap(), vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
        assert_eq!(fibonacci(0).unwrap(), Vec::<u64>::new());
        assert_eq!(fibonacci(-4).unwrap(), Vec::<u64>::new());
        assert_eq!(fibonacci(1).unwrap(), vec![0]);
        assert_eq!(fibonacci(2).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_fibonacci_limit() {
        let fib = fibonacci(MAX_FIBONACCI_TERMS).unwrap();
        assert_eq!(fib.len(), 94);
        assert_eq!(fib[93], 12_200_160_415_121_876_738);
        assert!(fibonacci(MAX_FIBONACCI_TERMS + 1).is_err());
    }
}
