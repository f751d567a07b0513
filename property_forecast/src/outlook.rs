//! End-to-end projection of one property's history

use crate::config::ProjectionConfig;
use crate::data::PropertyHistory;
use crate::error::Result;
use crate::metrics::{fit_diagnostics, FitDiagnostics};
use crate::scenarios::{self, Metric, Scenario, ScenarioTable};
use crate::utils::future_years;
use serde::Serialize;
use tracing::{debug, info};
use trend_math::{Forecast, ObservedSeries, TrendModel};

/// Fitted trend and base forecast for one metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricProjection {
    pub metric: Metric,
    pub series: ObservedSeries,
    pub model: TrendModel,
    pub forecast: Forecast,
}

impl MetricProjection {
    fn fit(history: &PropertyHistory, metric: Metric, years_forward: usize) -> Result<Self> {
        let series = history.series(metric)?;
        let model = TrendModel::fit(&series)?;
        let forecast = model.project(years_forward)?;
        debug!(
            metric = %metric,
            slope = model.slope(),
            intercept = model.intercept(),
            "projected metric"
        );

        Ok(Self {
            metric,
            series,
            model,
            forecast,
        })
    }

    pub fn diagnostics(&self) -> FitDiagnostics {
        fit_diagnostics(&self.series, &self.model)
    }
}

/// Projection results for one property
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyOutlook {
    history: PropertyHistory,
    future_years: Vec<i32>,
    noi: MetricProjection,
    occupancy: MetricProjection,
    value: MetricProjection,
    scenarios: ScenarioTable,
}

/// Fit each metric's trend and derive the scenario table.
pub fn project_property(
    history: &PropertyHistory,
    config: &ProjectionConfig,
) -> Result<PropertyOutlook> {
    config.validate()?;
    info!(
        property = history.property_name(),
        observations = history.len(),
        years_forward = config.years_forward,
        "projecting property"
    );

    let years = future_years(history.last_year(), config.years_forward)?;
    let noi = MetricProjection::fit(history, Metric::Noi, config.years_forward)?;
    let occupancy = MetricProjection::fit(history, Metric::Occupancy, config.years_forward)?;
    let value = MetricProjection::fit(history, Metric::Value, config.years_forward)?;

    let scenarios = scenarios::generate(
        &noi.forecast,
        &occupancy.forecast,
        &value.forecast,
        &years,
    )?;

    Ok(PropertyOutlook {
        history: history.clone(),
        future_years: years,
        noi,
        occupancy,
        value,
        scenarios,
    })
}

impl PropertyOutlook {
    pub fn property_name(&self) -> &str {
        self.history.property_name()
    }

    pub fn history(&self) -> &PropertyHistory {
        &self.history
    }

    pub fn future_years(&self) -> &[i32] {
        &self.future_years
    }

    pub fn scenarios(&self) -> &ScenarioTable {
        &self.scenarios
    }

    pub fn projection(&self, metric: Metric) -> &MetricProjection {
        match metric {
            Metric::Noi => &self.noi,
            Metric::Occupancy => &self.occupancy,
            Metric::Value => &self.value,
        }
    }

    /// Historical points and the three scenario lines for one metric
    pub fn chart_series(&self, metric: Metric) -> MetricChart {
        let historical = self
            .history
            .years()
            .into_iter()
            .zip(self.history.values(metric))
            .collect();

        let lines = [Scenario::Base, Scenario::Downside, Scenario::Upside]
            .into_iter()
            .map(|scenario| ScenarioLine {
                scenario,
                label: scenario.label().to_string(),
                points: self
                    .future_years
                    .iter()
                    .copied()
                    .zip(self.scenarios.column(metric, scenario))
                    .collect(),
            })
            .collect();

        MetricChart {
            metric,
            title: format!("{} – {}", chart_title(metric), self.property_name()),
            y_label: y_label(metric).to_string(),
            historical,
            lines,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One scenario line of a metric chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScenarioLine {
    pub scenario: Scenario,
    pub label: String,
    pub points: Vec<(i32, f64)>,
}

/// Data behind one metric's projection chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricChart {
    pub metric: Metric,
    pub title: String,
    pub y_label: String,
    /// Observed `(year, value)` points
    pub historical: Vec<(i32, f64)>,
    /// Base, Downside and Upside lines over the future years
    pub lines: Vec<ScenarioLine>,
}

fn chart_title(metric: Metric) -> &'static str {
    match metric {
        Metric::Noi => "NOI Projection",
        Metric::Occupancy => "Occupancy Projection",
        Metric::Value => "Property Value Projection",
    }
}

fn y_label(metric: Metric) -> &'static str {
    match metric {
        Metric::Occupancy => "Occupancy %",
        other => other.column_name(),
    }
}
