use property_forecast::config::{ProjectionConfig, DEFAULT_YEARS_FORWARD};
use property_forecast::utils::future_years;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_future_years_follow_last_year() {
    assert_eq!(
        future_years(2023, 5).unwrap(),
        vec![2024, 2025, 2026, 2027, 2028]
    );
    assert_eq!(future_years(1999, 1).unwrap(), vec![2000]);
}

#[test]
fn test_future_years_rejects_bad_horizon() {
    assert!(future_years(2023, 0).unwrap_err().is_invalid_input());
    assert!(future_years(i32::MAX - 1, 5).unwrap_err().is_invalid_input());
}

#[test]
fn test_default_config() {
    let config = ProjectionConfig::default();
    assert_eq!(config.years_forward, DEFAULT_YEARS_FORWARD);
    assert_eq!(config.years_forward, 5);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_from_json() {
    let config = ProjectionConfig::from_json(r#"{"years_forward": 10}"#).unwrap();
    assert_eq!(config.years_forward, 10);

    // missing fields use defaults
    let config = ProjectionConfig::from_json("{}").unwrap();
    assert_eq!(config.years_forward, 5);

    assert!(ProjectionConfig::from_json(r#"{"years_forward": 0}"#).is_err());
    assert!(ProjectionConfig::from_json("not json").is_err());
    assert!(ProjectionConfig::new(0).unwrap_err().is_invalid_input());
}

#[test]
fn test_config_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"years_forward": 3}}"#).unwrap();

    let config = ProjectionConfig::from_file(file.path()).unwrap();
    assert_eq!(config, ProjectionConfig::new(3).unwrap());
}
