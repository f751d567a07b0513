//! # Property Outlook
//!
//! Workspace facade tying together trend fitting and property scenarios.
//!
//! ## Example
//!
//! ```
//! use property_outlook_workspace::{project_property, Metric, PropertyHistory, PropertyRecord};
//! use property_outlook_workspace::{ProjectionConfig, Scenario};
//!
//! let records = vec![
//!     PropertyRecord {
//!         property_name: "Hedwig House".to_string(),
//!         year: 2022,
//!         noi: 100.0,
//!         occupancy: 90.0,
//!         value: 1000.0,
//!         dscr: None,
//!     },
//!     PropertyRecord {
//!         property_name: "Hedwig House".to_string(),
//!         year: 2023,
//!         noi: 110.0,
//!         occupancy: 91.0,
//!         value: 1100.0,
//!         dscr: None,
//!     },
//! ];
//! let history = PropertyHistory::new("Hedwig House", records).unwrap();
//! let outlook = project_property(&history, &ProjectionConfig::default()).unwrap();
//!
//! assert_eq!(outlook.scenarios().len(), 5);
//! assert_eq!(outlook.scenarios().years()[0], 2024);
//! let noi = outlook.scenarios().column(Metric::Noi, Scenario::Base);
//! assert!((noi[0] - 120.0).abs() < 1e-9);
//! ```

pub use property_forecast::{
    project_property, DataLoader, ForecastError, Metric, MetricChart, PortfolioData,
    ProjectionConfig, PropertyHistory, PropertyOutlook, PropertyRecord, Scenario, ScenarioRow,
    ScenarioTable,
};
pub use trend_math::{fit_and_project, Forecast, MathError, ObservedSeries, TrendModel};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reexported_core_path() {
        let series = ObservedSeries::new(vec![100.0, 110.0, 120.0, 130.0]).unwrap();
        let forecast = fit_and_project(&series, 2).unwrap();
        assert_eq!(forecast.indices(), vec![4, 5]);
    }

    #[test]
    fn test_empty_series_is_rejected() {
        assert!(matches!(
            ObservedSeries::new(Vec::new()),
            Err(MathError::InvalidInput(_))
        ));
    }
}
