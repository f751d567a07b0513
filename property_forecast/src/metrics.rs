//! In-sample fit quality of a trend line

use serde::{Deserialize, Serialize};
use trend_math::{ObservedSeries, TrendModel};

/// How closely a fitted trend follows the observed history
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitDiagnostics {
    /// Change per year
    pub slope: f64,
    /// Fitted value at the first observed year
    pub intercept: f64,
    /// Coefficient of determination
    pub r_squared: f64,
    /// Mean Absolute Error
    pub mae: f64,
    /// Root Mean Squared Error
    pub rmse: f64,
}

/// Compare a fitted trend with the series it was fitted on
pub fn fit_diagnostics(series: &ObservedSeries, model: &TrendModel) -> FitDiagnostics {
    let residuals = model.residuals(series);
    let n = residuals.len() as f64;

    let mae = residuals.iter().map(|e| e.abs()).sum::<f64>() / n;
    let mse = residuals.iter().map(|e| e.powi(2)).sum::<f64>() / n;

    FitDiagnostics {
        slope: model.slope(),
        intercept: model.intercept(),
        r_squared: model.r_squared(series),
        mae,
        rmse: mse.sqrt(),
    }
}

impl std::fmt::Display for FitDiagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "slope {:.4}, intercept {:.4}, R² {:.4}, MAE {:.4}, RMSE {:.4}",
            self.slope, self.intercept, self.r_squared, self.mae, self.rmse
        )
    }
}
