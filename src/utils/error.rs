use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlgoError {
    #[error("{operation} requires at least one element")]
    EmptyInput { operation: &'static str },

    #[error("{operation}({input}) overflows {limit}")]
    Overflow {
        operation: &'static str,
        input: i64,
        limit: &'static str,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Arithmetic,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AlgoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AlgoError::EmptyInput { .. } => ErrorCategory::Input,
            AlgoError::Overflow { .. } => ErrorCategory::Arithmetic,
            AlgoError::ConfigValidationError { .. } | AlgoError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            AlgoError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Arithmetic | ErrorCategory::Configuration => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AlgoError::EmptyInput { .. } => {
                "Provide a non-empty sequence (array.size must be at least 1)".to_string()
            }
            AlgoError::Overflow { operation, .. } => {
                format!("Use a smaller input for {}", operation)
            }
            AlgoError::ConfigValidationError { field, .. } => {
                format!("Check the '{}' entry in the configuration file", field)
            }
            AlgoError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' and run again", field)
            }
            AlgoError::IoError(_) => {
                "Check that the file exists and stdout is writable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Invalid input: {}", self),
            ErrorCategory::Arithmetic => format!("Result out of range: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }

    /// 根據錯誤嚴重程度決定退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, AlgoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_high_severity() {
        let err = AlgoError::EmptyInput { operation: "max" };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "max requires at least one element");
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: AlgoError = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert!(err.user_friendly_message().starts_with("System error"));
    }
}
