use anyhow::Result;
use small_algos::config::ShowcaseConfig;
use small_algos::{build_engine, AlgoError, DemoConfig, DemoSelection};

fn run(config: &DemoConfig, selection: DemoSelection) -> Result<String> {
    let mut engine = build_engine(config, selection)?;
    let mut out = Vec::new();
    engine.run(&mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_default_showcase_lines() -> Result<()> {
    let text = run(&DemoConfig::default(), DemoSelection::Showcase)?;

    assert!(text.contains("Factorial of 5: 120\n"));
    assert!(text.contains("Is 7 prime? Yes\n"));
    assert!(text.contains("Reversed string of 'hello': olleh\n"));
    assert!(text.contains("Sum of vector: 15\n"));
    assert!(text.contains("Max of vector: 5\n"));
    assert!(text.contains("Vector elements: 1 2 3 4 5 \n"));
    assert!(text.contains("Fibonacci sequence up to 10 terms: 0 1 1 2 3 5 8 13 21 34 \n"));
    assert!(text.contains("Is 'radar' a palindrome? Yes\n"));
    assert_eq!(text.lines().count(), 9);
    Ok(())
}

#[test]
fn test_custom_showcase_inputs() -> Result<()> {
    let config = DemoConfig {
        showcase: ShowcaseConfig {
            factorial_input: 0,
            prime_candidate: 1,
            reverse_input: "abc".to_string(),
            numbers: vec![-4, 10, 3],
            fibonacci_terms: 1,
            prime_limit: 10,
            palindrome_input: "level".to_string(),
        },
        ..DemoConfig::default()
    };
    let text = run(&config, DemoSelection::Showcase)?;

    assert!(text.contains("Factorial of 0: 1\n"));
    assert!(text.contains("Is 1 prime? No\n"));
    assert!(text.contains("Reversed string of 'abc': cba\n"));
    assert!(text.contains("Sum of vector: 9\n"));
    assert!(text.contains("Max of vector: 10\n"));
    assert!(text.contains("Fibonacci sequence up to 1 terms: 0 \n"));
    assert!(text.contains("Primes up to 10: 2 3 5 7 \n"));
    assert!(text.contains("Is 'level' a palindrome? Yes\n"));
    Ok(())
}

#[test]
fn test_fibonacci_overflow_surfaces_error() {
    let config = DemoConfig {
        showcase: ShowcaseConfig {
            fibonacci_terms: 200,
            ..ShowcaseConfig::default()
        },
        ..DemoConfig::default()
    };

    let mut engine = build_engine(&config, DemoSelection::Showcase).unwrap();
    let err = engine.run(&mut Vec::new()).unwrap_err();
    assert!(matches!(err, AlgoError::Overflow { operation: "fibonacci", input: 200, .. }));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_combined_run_prints_both_demos() -> Result<()> {
    let mut config = DemoConfig::default();
    config.array.seed = Some(5);
    config.array.size = 10;

    let text = run(&config, DemoSelection::All)?;

    let array_at = text.find("Sorted Array:").unwrap();
    let showcase_at = text.find("Factorial of 5: 120").unwrap();
    assert!(array_at < showcase_at);
    Ok(())
}

#[test]
fn test_huge_factorial_input_finishes() -> Result<()> {
    let config = DemoConfig {
        showcase: ShowcaseConfig {
            factorial_input: 1_000_000_000_000,
            ..ShowcaseConfig::default()
        },
        ..DemoConfig::default()
    };
    let text = run(&config, DemoSelection::Showcase)?;

    assert!(text.contains("Factorial of 1000000000000: 0\n"));
    Ok(())
}
