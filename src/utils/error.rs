use thiserror::Error;

#[derive(Error, Debug)]
pub enum LessonError {
    #[error("Called through an unset {capability} reference")]
    UnboundCapability { capability: String },

    #[error("Invalid payment amount: {amount}")]
    InvalidAmount { amount: f64 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Dispatch,
    Input,
    Io,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl LessonError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LessonError::UnboundCapability { .. } => ErrorCategory::Dispatch,
            LessonError::InvalidAmount { .. } => ErrorCategory::Input,
            LessonError::IoError(_) | LessonError::SerializationError(_) => ErrorCategory::Io,
            LessonError::TomlError(_)
            | LessonError::InvalidConfigValueError { .. }
            | LessonError::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Dispatch => ErrorSeverity::Critical,
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Medium,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            LessonError::UnboundCapability { capability } => {
                format!("Bind a concrete {} before dispatching through it", capability)
            }
            LessonError::InvalidAmount { .. } => {
                "Use a finite amount greater than or equal to zero".to_string()
            }
            LessonError::IoError(_) => "Check that the file exists and is readable".to_string(),
            LessonError::SerializationError(_) => "Retry with --format text".to_string(),
            LessonError::TomlError(_) => "Make sure the scenario file is valid TOML".to_string(),
            LessonError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the scenario file", field)
            }
            LessonError::MissingConfigError { field } => {
                format!("Add '{}' to the scenario file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LessonError::UnboundCapability { capability } => {
                format!("No {} was bound, so there is nothing to call", capability)
            }
            LessonError::InvalidAmount { amount } => {
                format!("{} is not a payable amount", amount)
            }
            other => other.to_string(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, LessonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unbound_capability_is_critical() {
        let err = LessonError::UnboundCapability {
            capability: "Attacker".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Dispatch);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert!(err.recovery_suggestion().contains("Attacker"));
    }

    #[test]
    fn test_config_errors_map_to_exit_code_one() {
        let err = LessonError::MissingConfigError {
            field: "payments".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = vec![
            LessonError::UnboundCapability {
                capability: "Sender".to_string(),
            },
            LessonError::InvalidAmount { amount: -1.0 },
            LessonError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
            LessonError::InvalidConfigValueError {
                field: "reports.recipient".to_string(),
                value: "${REPORT_RECIPIENT}".to_string(),
                reason: "unresolved".to_string(),
            },
            LessonError::MissingConfigError {
                field: "capture.iterations".to_string(),
            },
        ];

        for err in errors {
            assert_ne!(err.exit_code(), 0, "{}", err);
        }
    }
}
