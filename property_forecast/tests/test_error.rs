use property_forecast::error::ForecastError;
use std::io;
use trend_math::MathError;

#[test]
fn test_error_conversion() {
    // IO error conversion
    let io_error = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let forecast_error = ForecastError::from(io_error);
    assert!(matches!(forecast_error, ForecastError::IoError(_)));

    // Trend fitter errors are wrapped
    let math_error = MathError::InvalidInput("empty series".to_string());
    let forecast_error = ForecastError::from(math_error.clone());
    match forecast_error {
        ForecastError::Math(inner) => assert_eq!(inner, math_error),
        _ => panic!("Expected Math variant"),
    }
}

#[test]
fn test_error_display() {
    let error = ForecastError::MissingColumn("Occupancy".to_string());
    assert_eq!(error.to_string(), "Missing required column: Occupancy");

    let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "permission denied");
    let error_string = ForecastError::from(io_error).to_string();
    assert!(error_string.contains("IO error"));
    assert!(error_string.contains("permission denied"));
}

#[test]
fn test_invalid_input_classification() {
    assert!(ForecastError::InvalidInput("x".to_string()).is_invalid_input());
    assert!(ForecastError::from(MathError::InvalidInput("x".to_string())).is_invalid_input());
    assert!(ForecastError::from(MathError::InsufficientData("x".to_string())).is_invalid_input());

    assert!(!ForecastError::from(MathError::CalculationError("x".to_string())).is_invalid_input());
    assert!(!ForecastError::DataError("x".to_string()).is_invalid_input());
    assert!(!ForecastError::PropertyNotFound("x".to_string()).is_invalid_input());
}
