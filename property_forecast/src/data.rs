//! Property-level data loading and per-property selection

use crate::error::{ForecastError, Result};
use crate::scenarios::Metric;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};
use trend_math::ObservedSeries;

/// Columns every input table must provide
pub const REQUIRED_COLUMNS: [&str; 5] = ["Property Name", "Year", "NOI", "Occupancy", "Value"];

/// One annual observation for one property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyRecord {
    #[serde(rename = "Property Name")]
    pub property_name: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "NOI")]
    pub noi: f64,
    #[serde(rename = "Occupancy")]
    pub occupancy: f64,
    #[serde(rename = "Value")]
    pub value: f64,
    /// Debt service coverage ratio, carried through but not projected
    #[serde(rename = "DSCR", default)]
    pub dscr: Option<f64>,
}

impl PropertyRecord {
    /// Observed value of a metric
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Noi => self.noi,
            Metric::Occupancy => self.occupancy,
            Metric::Value => self.value,
        }
    }
}

/// Data loader for property tables
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a property table from a CSV file
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<PortfolioData> {
        let file = File::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "loading property table");
        Self::from_reader(file)
    }

    /// Load a property table from any CSV source with a header row
    pub fn from_reader<R: Read>(reader: R) -> Result<PortfolioData> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for required in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == required) {
                return Err(ForecastError::MissingColumn(required.to_string()));
            }
        }

        let mut records = Vec::new();
        for row in csv_reader.deserialize() {
            let record: PropertyRecord = row?;
            records.push(record);
        }

        PortfolioData::new(records)
    }
}

/// All rows of a loaded property table
#[derive(Debug, Clone)]
pub struct PortfolioData {
    records: Vec<PropertyRecord>,
}

impl PortfolioData {
    /// Wrap already-parsed rows, rejecting empty tables and non-finite metrics
    pub fn new(records: Vec<PropertyRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(ForecastError::DataError(
                "Property table contains no rows".to_string(),
            ));
        }

        for record in &records {
            for metric in Metric::ALL {
                if !record.metric(metric).is_finite() {
                    return Err(ForecastError::DataError(format!(
                        "Non-finite {} for {} in {}",
                        metric, record.property_name, record.year
                    )));
                }
            }
        }

        Ok(Self { records })
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct property names in order of first appearance
    pub fn property_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.property_name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Year-sorted history of one property
    pub fn property_history(&self, property_name: &str) -> Result<PropertyHistory> {
        let rows: Vec<PropertyRecord> = self
            .records
            .iter()
            .filter(|r| r.property_name == property_name)
            .cloned()
            .collect();

        if rows.is_empty() {
            return Err(ForecastError::PropertyNotFound(property_name.to_string()));
        }

        PropertyHistory::new(property_name, rows)
    }

    /// History of the first property in the table
    pub fn first_property_history(&self) -> Result<PropertyHistory> {
        let name = self.records[0].property_name.clone();
        self.property_history(&name)
    }
}

/// Annual history of a single property, ascending by year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyHistory {
    property_name: String,
    records: Vec<PropertyRecord>,
}

impl PropertyHistory {
    /// Sort `records` by year and check they describe one property.
    ///
    /// Duplicate years are rejected. Missing years are allowed but logged,
    /// because the trend coordinate is the row position, not the year.
    pub fn new(property_name: &str, mut records: Vec<PropertyRecord>) -> Result<Self> {
        if records.is_empty() {
            return Err(ForecastError::InvalidInput(format!(
                "No history rows for {}",
                property_name
            )));
        }

        if let Some(other) = records.iter().find(|r| r.property_name != property_name) {
            return Err(ForecastError::DataError(format!(
                "Row for {} found in history of {}",
                other.property_name, property_name
            )));
        }

        records.sort_by_key(|r| r.year);

        for pair in records.windows(2) {
            let (prev, next) = (pair[0].year, pair[1].year);
            if prev == next {
                return Err(ForecastError::DataError(format!(
                    "Duplicate year {} for {}",
                    next, property_name
                )));
            }
            if next - prev > 1 {
                warn!(
                    property = property_name,
                    from = prev,
                    to = next,
                    "gap in annual history"
                );
            }
        }

        Ok(Self {
            property_name: property_name.to_string(),
            records,
        })
    }

    pub fn property_name(&self) -> &str {
        &self.property_name
    }

    pub fn records(&self) -> &[PropertyRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Observed years, ascending
    pub fn years(&self) -> Vec<i32> {
        self.records.iter().map(|r| r.year).collect()
    }

    /// Most recent observed year
    pub fn last_year(&self) -> i32 {
        // never empty after construction
        self.records.last().map(|r| r.year).unwrap_or_default()
    }

    /// Observed values of one metric, ascending by year
    pub fn values(&self, metric: Metric) -> Vec<f64> {
        self.records.iter().map(|r| r.metric(metric)).collect()
    }

    /// Position-indexed series of one metric for trend fitting
    pub fn series(&self, metric: Metric) -> Result<ObservedSeries> {
        Ok(ObservedSeries::new(self.values(metric))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, year: i32, noi: f64) -> PropertyRecord {
        PropertyRecord {
            property_name: name.to_string(),
            year,
            noi,
            occupancy: 90.0,
            value: noi * 10.0,
            dscr: None,
        }
    }

    #[test]
    fn test_history_is_sorted_by_year() {
        let history = PropertyHistory::new(
            "Oak Plaza",
            vec![
                record("Oak Plaza", 2021, 3.0),
                record("Oak Plaza", 2019, 1.0),
                record("Oak Plaza", 2020, 2.0),
            ],
        )
        .unwrap();

        assert_eq!(history.years(), vec![2019, 2020, 2021]);
        assert_eq!(history.values(Metric::Noi), vec![1.0, 2.0, 3.0]);
        assert_eq!(history.last_year(), 2021);
    }

    #[test]
    fn test_duplicate_year_rejected() {
        let result = PropertyHistory::new(
            "Oak Plaza",
            vec![record("Oak Plaza", 2020, 1.0), record("Oak Plaza", 2020, 2.0)],
        );
        assert!(matches!(result, Err(ForecastError::DataError(_))));
    }

    #[test]
    fn test_foreign_rows_rejected() {
        let result = PropertyHistory::new(
            "Oak Plaza",
            vec![record("Oak Plaza", 2020, 1.0), record("Elm Court", 2021, 2.0)],
        );
        assert!(matches!(result, Err(ForecastError::DataError(_))));
    }
}
