//! Base / Upside / Downside scenario bands derived from trend forecasts

use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use trend_math::Forecast;

/// Upside occupancy never exceeds full occupancy
pub const OCCUPANCY_CEILING: f64 = 100.0;

/// Property metric projected by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    /// Net Operating Income
    Noi,
    /// Occupancy in percent
    Occupancy,
    /// Appraised value
    Value,
}

impl Metric {
    pub const ALL: [Metric; 3] = [Metric::Noi, Metric::Occupancy, Metric::Value];

    /// Column name in the input table
    pub fn column_name(&self) -> &'static str {
        match self {
            Metric::Noi => "NOI",
            Metric::Occupancy => "Occupancy",
            Metric::Value => "Value",
        }
    }

    /// Prefix of the scenario table columns
    pub fn scenario_prefix(&self) -> &'static str {
        match self {
            Metric::Noi => "NOI",
            Metric::Occupancy => "Occ",
            Metric::Value => "Value",
        }
    }

    /// Fixed multipliers applied to this metric's base forecast
    pub fn adjustment(&self) -> ScenarioAdjustment {
        match self {
            Metric::Noi => ScenarioAdjustment::NOI,
            Metric::Occupancy => ScenarioAdjustment::OCCUPANCY,
            Metric::Value => ScenarioAdjustment::VALUE,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Named scenario band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Scenario {
    Base,
    Upside,
    Downside,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Base, Scenario::Upside, Scenario::Downside];

    /// Suffix of the scenario table columns
    pub fn column_suffix(&self) -> &'static str {
        match self {
            Scenario::Base => "Base",
            Scenario::Upside => "Up",
            Scenario::Downside => "Down",
        }
    }

    /// Human readable name, as used in chart legends
    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Base => "Base Case",
            Scenario::Upside => "Upside",
            Scenario::Downside => "Downside",
        }
    }
}

/// Multiplicative shocks for one metric
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScenarioAdjustment {
    /// Multiplier for the upside band
    pub upside: f64,
    /// Multiplier for the downside band
    pub downside: f64,
    /// Upper bound applied to the upside band only
    pub upside_cap: Option<f64>,
}

impl ScenarioAdjustment {
    /// +5% / -5% NOI shock
    pub const NOI: ScenarioAdjustment = ScenarioAdjustment {
        upside: 1.05,
        downside: 0.95,
        upside_cap: None,
    };

    /// +2% / -3% occupancy shift, upside capped at full occupancy
    pub const OCCUPANCY: ScenarioAdjustment = ScenarioAdjustment {
        upside: 1.02,
        downside: 0.97,
        upside_cap: Some(OCCUPANCY_CEILING),
    };

    /// +8% / -10% valuation swing
    pub const VALUE: ScenarioAdjustment = ScenarioAdjustment {
        upside: 1.08,
        downside: 0.90,
        upside_cap: None,
    };

    /// Scenario value for a base forecast value.
    ///
    /// The downside band has no floor.
    pub fn apply(&self, scenario: Scenario, base: f64) -> f64 {
        match scenario {
            Scenario::Base => base,
            Scenario::Upside => {
                let up = base * self.upside;
                match self.upside_cap {
                    Some(cap) => up.min(cap),
                    None => up,
                }
            }
            Scenario::Downside => base * self.downside,
        }
    }
}

/// Scenario values for one future year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRow {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "NOI_Base")]
    pub noi_base: f64,
    #[serde(rename = "NOI_Up")]
    pub noi_up: f64,
    #[serde(rename = "NOI_Down")]
    pub noi_down: f64,
    #[serde(rename = "Occ_Base")]
    pub occ_base: f64,
    #[serde(rename = "Occ_Up")]
    pub occ_up: f64,
    #[serde(rename = "Occ_Down")]
    pub occ_down: f64,
    #[serde(rename = "Value_Base")]
    pub value_base: f64,
    #[serde(rename = "Value_Up")]
    pub value_up: f64,
    #[serde(rename = "Value_Down")]
    pub value_down: f64,
}

impl ScenarioRow {
    fn derive(year: i32, noi: f64, occupancy: f64, value: f64) -> Self {
        let noi_adj = Metric::Noi.adjustment();
        let occ_adj = Metric::Occupancy.adjustment();
        let value_adj = Metric::Value.adjustment();

        Self {
            year,
            noi_base: noi,
            noi_up: noi_adj.apply(Scenario::Upside, noi),
            noi_down: noi_adj.apply(Scenario::Downside, noi),
            occ_base: occupancy,
            occ_up: occ_adj.apply(Scenario::Upside, occupancy),
            occ_down: occ_adj.apply(Scenario::Downside, occupancy),
            value_base: value,
            value_up: value_adj.apply(Scenario::Upside, value),
            value_down: value_adj.apply(Scenario::Downside, value),
        }
    }

    /// Value of one metric under one scenario
    pub fn get(&self, metric: Metric, scenario: Scenario) -> f64 {
        match (metric, scenario) {
            (Metric::Noi, Scenario::Base) => self.noi_base,
            (Metric::Noi, Scenario::Upside) => self.noi_up,
            (Metric::Noi, Scenario::Downside) => self.noi_down,
            (Metric::Occupancy, Scenario::Base) => self.occ_base,
            (Metric::Occupancy, Scenario::Upside) => self.occ_up,
            (Metric::Occupancy, Scenario::Downside) => self.occ_down,
            (Metric::Value, Scenario::Base) => self.value_base,
            (Metric::Value, Scenario::Upside) => self.value_up,
            (Metric::Value, Scenario::Downside) => self.value_down,
        }
    }
}

/// Scenario rows keyed by future year, in year order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioTable {
    rows: Vec<ScenarioRow>,
}

impl ScenarioTable {
    pub fn rows(&self) -> &[ScenarioRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Future years covered by the table
    pub fn years(&self) -> Vec<i32> {
        self.rows.iter().map(|r| r.year).collect()
    }

    /// One metric/scenario column in year order
    pub fn column(&self, metric: Metric, scenario: Scenario) -> Vec<f64> {
        self.rows.iter().map(|r| r.get(metric, scenario)).collect()
    }

    /// Pretty-printed JSON array of rows
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.rows)?)
    }
}

impl fmt::Display for ScenarioTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>6}", "Year")?;
        for metric in Metric::ALL {
            for scenario in Scenario::ALL {
                let name = format!("{}_{}", metric.scenario_prefix(), scenario.column_suffix());
                write!(f, " {:>16}", name)?;
            }
        }
        writeln!(f)?;

        for row in &self.rows {
            write!(f, "{:>6}", row.year)?;
            for metric in Metric::ALL {
                for scenario in Scenario::ALL {
                    write!(f, " {:>16.2}", row.get(metric, scenario))?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Combine three base forecasts into a scenario table.
///
/// All forecasts and `future_years` must share the same non-zero length;
/// row `i` belongs to `future_years[i]`.
pub fn generate(
    noi_forecast: &Forecast,
    occ_forecast: &Forecast,
    value_forecast: &Forecast,
    future_years: &[i32],
) -> Result<ScenarioTable> {
    let horizon = future_years.len();
    if horizon == 0 {
        return Err(ForecastError::InvalidInput(
            "At least one future year is required".to_string(),
        ));
    }

    for (metric, forecast) in [
        (Metric::Noi, noi_forecast),
        (Metric::Occupancy, occ_forecast),
        (Metric::Value, value_forecast),
    ] {
        if forecast.len() != horizon {
            return Err(ForecastError::InvalidInput(format!(
                "{} forecast length ({}) doesn't match future years ({})",
                metric,
                forecast.len(),
                horizon
            )));
        }
    }

    let rows = future_years
        .iter()
        .zip(noi_forecast.points())
        .zip(occ_forecast.points())
        .zip(value_forecast.points())
        .map(|(((&year, noi), occ), value)| {
            ScenarioRow::derive(year, noi.value, occ.value, value.value)
        })
        .collect();

    Ok(ScenarioTable { rows })
}
