//! Error types for the property_forecast crate

use thiserror::Error;
use trend_math::MathError;

/// Custom error types for the property_forecast crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Caller-supplied input violates a precondition
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Error related to data validation or processing
    #[error("Data error: {0}")]
    DataError(String),

    /// A required column is absent from the input table
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// No rows exist for the requested property
    #[error("Property not found: {0}")]
    PropertyNotFound(String),

    /// Invalid projection settings
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error while serializing results
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Error from the trend fitter
    #[error("Math error: {0}")]
    Math(#[from] MathError),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

impl ForecastError {
    /// Whether this is a caller input error, including ones raised by the fitter
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            ForecastError::InvalidInput(_)
                | ForecastError::Math(MathError::InvalidInput(_))
                | ForecastError::Math(MathError::InsufficientData(_))
        )
    }
}

impl From<serde_json::Error> for ForecastError {
    fn from(err: serde_json::Error) -> Self {
        ForecastError::SerializationError(err.to_string())
    }
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
