use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Invalid date of birth: {message}")]
    InvalidDate { message: String },

    #[error("Date of birth {birth} is after the reference date {reference}")]
    FutureDateOfBirth {
        birth: chrono::NaiveDate,
        reference: chrono::NaiveDate,
    },

    #[error("height_cm must be > 0, got {height_cm}")]
    InvalidHeight { height_cm: f64 },

    #[error("Invalid argument '{field}': {reason}")]
    InvalidArgument { field: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl AdvisorError {
    pub fn invalid_argument(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by what the user typed, as opposed to the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDate { .. }
                | Self::FutureDateOfBirth { .. }
                | Self::InvalidHeight { .. }
                | Self::InvalidArgument { .. }
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidDate { .. } => {
                "The date of birth is not a real calendar date.".to_string()
            }
            Self::FutureDateOfBirth { .. } => "Date of birth is in the future.".to_string(),
            Self::InvalidHeight { .. } => {
                "Enter a valid height for the BMI calculation.".to_string()
            }
            Self::InvalidArgument { field, reason } => format!("{}: {}", field, reason),
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::SerializationError(e) => format!("Could not produce JSON output: {}", e),
            Self::ConfigError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            Self::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for {}: {}", value, field, reason)
            }
        }
    }

    /// Process exit code for the CLI. Input and config problems are 1, I/O is 2.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::IoError(_) | Self::SerializationError(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
