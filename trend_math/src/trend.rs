//! Linear trend fitting and projection for annual series
//!
//! Fits an ordinary least-squares line over position-indexed observations
//! (`x = 0, 1, 2, ...`) and extends it beyond the last observed index.
//!
//! ```
//! use trend_math::trend::{fit_and_project, ObservedSeries};
//!
//! let series = ObservedSeries::new(vec![100.0, 110.0, 120.0, 130.0]).unwrap();
//! let forecast = fit_and_project(&series, 2).unwrap();
//! assert_eq!(forecast.indices(), vec![4, 5]);
//! assert!((forecast.values()[0] - 140.0).abs() < 1e-9);
//! ```

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Below this the x-spread is treated as zero
const DENOMINATOR_EPSILON: f64 = 1e-12;

/// Position-indexed observations of one metric, oldest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawSeries")]
pub struct ObservedSeries {
    values: Vec<f64>,
}

#[derive(Deserialize)]
struct RawSeries {
    values: Vec<f64>,
}

impl TryFrom<RawSeries> for ObservedSeries {
    type Error = MathError;

    fn try_from(raw: RawSeries) -> Result<Self> {
        Self::new(raw.values)
    }
}

impl ObservedSeries {
    /// Create a series from chronologically ordered values.
    ///
    /// Fails on an empty input or on any NaN/infinite value.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(MathError::InvalidInput(
                "Observed series must contain at least one value".to_string(),
            ));
        }
        ensure_finite(&values)?;

        Ok(Self { values })
    }

    /// Observed values in chronological order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(index, value)` pairs with the positional regression coordinate
    pub fn points(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.values.iter().copied().enumerate()
    }
}

/// One projected point beyond the observed range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Regression coordinate, continuing after the last observed index
    pub index: usize,
    /// Value of the fitted line at `index`
    pub value: f64,
}

/// Projection of a trend line over the next `years_forward` indices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    points: Vec<ForecastPoint>,
}

impl Forecast {
    /// Projected points in index order
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Projected values in index order
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Future regression coordinates
    pub fn indices(&self) -> Vec<usize> {
        self.points.iter().map(|p| p.index).collect()
    }

    /// Horizon length
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Straight line `y = slope * x + intercept` fitted by least squares
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTrendModel")]
pub struct TrendModel {
    slope: f64,
    intercept: f64,
    observations: usize,
}

#[derive(Deserialize)]
struct RawTrendModel {
    slope: f64,
    intercept: f64,
    observations: usize,
}

impl TryFrom<RawTrendModel> for TrendModel {
    type Error = MathError;

    fn try_from(raw: RawTrendModel) -> Result<Self> {
        Self::from_coefficients(raw.slope, raw.intercept, raw.observations)
    }
}

impl TrendModel {
    /// Fit the closed-form OLS line over `x = 0..n`.
    ///
    /// A single observation has no defined slope; it is fitted as a flat line
    /// through that value (`slope = 0`, `intercept = y0`).
    pub fn fit(series: &ObservedSeries) -> Result<Self> {
        let n = series.len();
        match n {
            0 => Err(MathError::InvalidInput(
                "Cannot fit a trend to an empty series".to_string(),
            )),
            1 => {
                let intercept = series.values()[0];
                debug!(intercept, "single observation, using flat trend");
                Ok(Self {
                    slope: 0.0,
                    intercept,
                    observations: 1,
                })
            }
            _ => {
                let n_f = n as f64;
                let x_mean = (n_f - 1.0) / 2.0;
                let y_mean = series.values().iter().sum::<f64>() / n_f;

                let mut numerator = 0.0;
                let mut denominator = 0.0;
                for (i, y) in series.points() {
                    let dx = i as f64 - x_mean;
                    numerator += dx * (y - y_mean);
                    denominator += dx * dx;
                }

                if denominator < DENOMINATOR_EPSILON {
                    return Err(MathError::CalculationError(
                        "Cannot calculate slope: x values are too similar".to_string(),
                    ));
                }

                let slope = numerator / denominator;
                let intercept = y_mean - slope * x_mean;
                ensure_finite(&[slope, intercept])?;

                debug!(slope, intercept, observations = n, "fitted linear trend");
                Ok(Self {
                    slope,
                    intercept,
                    observations: n,
                })
            }
        }
    }

    /// Build a model from known coefficients
    pub fn from_coefficients(slope: f64, intercept: f64, observations: usize) -> Result<Self> {
        if observations == 0 {
            return Err(MathError::InvalidInput(
                "A trend model needs at least one observation".to_string(),
            ));
        }
        ensure_finite(&[slope, intercept])?;

        Ok(Self {
            slope,
            intercept,
            observations,
        })
    }

    /// Change per index step
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Fitted value at index 0
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Number of observations the model was fitted on
    pub fn observations(&self) -> usize {
        self.observations
    }

    /// Value of the line at coordinate `x`
    pub fn predict_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Project the line over the `years_forward` indices after the fitted range.
    pub fn project(&self, years_forward: usize) -> Result<Forecast> {
        if years_forward == 0 {
            return Err(MathError::InvalidInput(
                "years_forward must be positive".to_string(),
            ));
        }

        let start = self.observations;
        let end = start.checked_add(years_forward).ok_or_else(|| {
            MathError::InvalidInput(format!(
                "Projecting {} steps past index {} overflows",
                years_forward, start
            ))
        })?;

        let mut points = Vec::new();
        points.try_reserve_exact(years_forward).map_err(|_| {
            MathError::InvalidInput(format!(
                "years_forward {} is too large to project",
                years_forward
            ))
        })?;
        points.extend((start..end).map(|index| ForecastPoint {
            index,
            value: self.predict_at(index as f64),
        }));

        Ok(Forecast { points })
    }

    /// In-sample fitted values for `x = 0..observations`
    pub fn fitted_values(&self) -> Vec<f64> {
        (0..self.observations)
            .map(|i| self.predict_at(i as f64))
            .collect()
    }

    /// Observed minus fitted, per observation
    pub fn residuals(&self, series: &ObservedSeries) -> Vec<f64> {
        series
            .points()
            .map(|(i, y)| y - self.predict_at(i as f64))
            .collect()
    }

    /// Coefficient of determination of the fit.
    ///
    /// A series with no variance is reported as a perfect fit.
    pub fn r_squared(&self, series: &ObservedSeries) -> f64 {
        let y_mean = series.values().iter().sum::<f64>() / series.len() as f64;
        let ss_total: f64 = series.values().iter().map(|y| (y - y_mean).powi(2)).sum();
        let ss_residual: f64 = self.residuals(series).iter().map(|r| r * r).sum();

        if ss_total.abs() < DENOMINATOR_EPSILON {
            1.0
        } else {
            1.0 - ss_residual / ss_total
        }
    }
}

/// Fit a linear trend to `series` and project it `years_forward` steps ahead.
pub fn fit_and_project(series: &ObservedSeries, years_forward: usize) -> Result<Forecast> {
    if years_forward == 0 {
        return Err(MathError::InvalidInput(
            "years_forward must be positive".to_string(),
        ));
    }

    TrendModel::fit(series)?.project(years_forward)
}

/// Reject NaN and infinite values
pub fn ensure_finite(values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(pos) => Err(MathError::InvalidInput(format!(
            "Non-finite value {} at position {}",
            values[pos], pos
        ))),
        None => Ok(()),
    }
}
