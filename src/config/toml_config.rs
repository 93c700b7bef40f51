use crate::core::algorithms::{MAX_FIBONACCI_TERMS, MAX_PRIME_LIMIT};
use crate::core::display::DEFAULT_PER_LINE;
use crate::core::sequence::DEFAULT_UPPER_BOUND;
use crate::utils::error::{AlgoError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Full configuration for both demos. Every field has a default, so an
/// empty file (or no file at all) reproduces the fixed demonstrations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub array: ArrayConfig,
    pub showcase: ShowcaseConfig,
    pub monitoring: MonitoringConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrayConfig {
    pub size: usize,
    pub upper_bound: i32,
    pub per_line: usize,
    /// Fixed seed; the wall clock is used when absent.
    pub seed: Option<u64>,
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self {
            size: 100,
            upper_bound: DEFAULT_UPPER_BOUND,
            per_line: DEFAULT_PER_LINE,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub factorial_input: i64,
    pub prime_candidate: i64,
    pub reverse_input: String,
    pub numbers: Vec<i32>,
    pub fibonacci_terms: i64,
    pub prime_limit: i64,
    pub palindrome_input: String,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            factorial_input: 5,
            prime_candidate: 7,
            reverse_input: "hello".to_string(),
            numbers: vec![1, 2, 3, 4, 5],
            fibonacci_terms: 10,
            prime_limit: 50,
            palindrome_input: "radar".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl DemoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(AlgoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AlgoError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DEMO_SEED})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AlgoError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.enabled
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_positive_number("array.size", self.array.size, 1)?;
        validation::validate_range("array.upper_bound", self.array.upper_bound, 1, i32::MAX)?;

        validation::validate_range(
            "showcase.fibonacci_terms",
            self.showcase.fibonacci_terms,
            i64::MIN,
            MAX_FIBONACCI_TERMS,
        )?;
        validation::validate_range(
            "showcase.prime_limit",
            self.showcase.prime_limit,
            i64::MIN,
            MAX_PRIME_LIMIT,
        )?;
        validation::validate_non_empty_slice("showcase.numbers", &self.showcase.numbers)?;

        Ok(())
    }
}
