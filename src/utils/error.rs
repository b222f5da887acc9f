use crate::core::nectar::CalculationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NectarError {
    #[error(transparent)]
    Calculation(#[from] CalculationError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Calculation,
    Configuration,
    Io,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NectarError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NectarError::Calculation(_) => ErrorCategory::Calculation,
            NectarError::IoError(_) => ErrorCategory::Io,
            NectarError::SerializationError(_) => ErrorCategory::Serialization,
            NectarError::ConfigValidationError { .. }
            | NectarError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            NectarError::Calculation(CalculationError::UnexpectedArithmeticError { .. }) => {
                ErrorSeverity::Critical
            }
            NectarError::Calculation(_) => ErrorSeverity::High,
            NectarError::ConfigValidationError { .. }
            | NectarError::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            NectarError::IoError(_) | NectarError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn calculation_error(&self) -> Option<&CalculationError> {
        match self {
            NectarError::Calculation(e) => Some(e),
            _ => None,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            NectarError::Calculation(e) => crate::app::presenter::error_message(e),
            NectarError::IoError(e) => format!("Could not read or write a file: {}", e),
            NectarError::SerializationError(e) => format!("Could not encode the result: {}", e),
            NectarError::ConfigValidationError { field, message } => {
                format!("The form configuration is invalid ({}): {}", field, message)
            }
            NectarError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Form setting {} = '{}' is not allowed: {}", field, value, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            NectarError::Calculation(CalculationError::InvalidInput { field }) => {
                format!("Enter a plain number for {}", field)
            }
            NectarError::Calculation(CalculationError::NonPositiveMass) => {
                "Both the pulp mass and the nectar mass must be greater than zero".to_string()
            }
            NectarError::Calculation(CalculationError::NegativeBrix) => {
                "Brix is a percentage of soluble solids and cannot be below 0".to_string()
            }
            NectarError::Calculation(CalculationError::InfeasibleMix { .. }) => {
                "Raise the final nectar mass or lower the final Brix; water and sugar can only be added".to_string()
            }
            NectarError::Calculation(CalculationError::UnexpectedArithmeticError { .. }) => {
                "Check that the inputs are within a realistic range".to_string()
            }
            NectarError::IoError(_) => "Check that the file exists and is readable".to_string(),
            NectarError::SerializationError(_) => "Try --format text".to_string(),
            NectarError::ConfigValidationError { .. }
            | NectarError::InvalidConfigValueError { .. } => {
                "Fix the form configuration file or run without --config".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, NectarError>;
