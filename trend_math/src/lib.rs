//! # Trend Math
//!
//! Least-squares trend fitting for short annual series.
//! This crate provides the linear trend model used to project property
//! metrics (NOI, occupancy, value) beyond their observed history.

use thiserror::Error;

pub mod trend;

pub use trend::{fit_and_project, Forecast, ForecastPoint, ObservedSeries, TrendModel};

/// Errors that can occur in trend calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: {0}")]
    InsufficientData(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for trend math operations
pub type Result<T> = std::result::Result<T, MathError>;
