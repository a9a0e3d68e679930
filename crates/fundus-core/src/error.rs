use thiserror::Error;

/// Core error types for Fundus domain operations
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid diagnosis timestamp: {0}")]
    InvalidDateTime(String),

    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Time parsing error: {0}")]
    TimeError(#[from] time::error::Parse),

    #[error("Invalid record data: {message}")]
    InvalidRecord { message: String },

    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CoreError {
    /// Create a new InvalidDateTime error
    pub fn invalid_date_time(datetime: impl Into<String>) -> Self {
        Self::InvalidDateTime(datetime.into())
    }

    /// Create a new InvalidRecord error
    pub fn invalid_record(message: impl Into<String>) -> Self {
        Self::InvalidRecord {
            message: message.into(),
        }
    }

    /// Create a new Configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Check if this error was caused by bad input rather than infrastructure
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidDateTime(_)
                | Self::InvalidRecord { .. }
                | Self::JsonError(_)
                | Self::TimeError(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
