//! # Property Forecast
//!
//! Trend-based five-year outlooks for income-producing properties.
//!
//! ## Features
//!
//! - Property table loading from CSV (`Property Name, Year, NOI, Occupancy, Value`)
//! - Per-property history selection, sorted by year
//! - Linear trend projection of NOI, occupancy and value (via `trend_math`)
//! - Base / Upside / Downside scenario bands with fixed shocks
//! - Chart-ready series and JSON export of the results
//!
//! ## Scenario Bands
//!
//! | Metric    | Upside              | Downside |
//! |-----------|---------------------|----------|
//! | NOI       | +5%                 | -5%      |
//! | Occupancy | +2%, capped at 100  | -3%      |
//! | Value     | +8%                 | -10%     |
//!
//! ## Quick Start
//!
//! ```no_run
//! use property_forecast::{project_property, DataLoader, Metric, ProjectionConfig};
//!
//! let portfolio = DataLoader::from_csv("cmbs_property_data.csv")?;
//! let history = portfolio.first_property_history()?;
//!
//! let outlook = project_property(&history, &ProjectionConfig::default())?;
//! println!("{}", outlook.scenarios());
//!
//! let noi_chart = outlook.chart_series(Metric::Noi);
//! println!("{}: {} historical points", noi_chart.title, noi_chart.historical.len());
//! # Ok::<(), property_forecast::ForecastError>(())
//! ```
//!
//! The core steps can also be called directly on pre-cleaned values:
//!
//! ```
//! use property_forecast::scenarios::generate;
//! use trend_math::{fit_and_project, ObservedSeries};
//!
//! let noi = fit_and_project(&ObservedSeries::new(vec![100.0, 110.0, 120.0, 130.0])?, 2)?;
//! let occ = fit_and_project(&ObservedSeries::new(vec![90.0, 92.0, 94.0, 96.0])?, 2)?;
//! let value = fit_and_project(&ObservedSeries::new(vec![1000.0, 1050.0, 1100.0, 1150.0])?, 2)?;
//!
//! let table = generate(&noi, &occ, &value, &[2024, 2025])?;
//! assert_eq!(table.years(), vec![2024, 2025]);
//! assert_eq!(table.rows()[1].occ_up, 100.0);
//! # Ok::<(), property_forecast::ForecastError>(())
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod outlook;
pub mod scenarios;
pub mod utils;

// Re-export commonly used types
pub use crate::config::ProjectionConfig;
pub use crate::data::{DataLoader, PortfolioData, PropertyHistory, PropertyRecord};
pub use crate::error::ForecastError;
pub use crate::outlook::{project_property, MetricChart, PropertyOutlook};
pub use crate::scenarios::{Metric, Scenario, ScenarioRow, ScenarioTable};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
