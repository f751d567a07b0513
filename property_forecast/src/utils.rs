//! Utility functions for the property_forecast crate

use crate::error::{ForecastError, Result};

/// Calendar years following `last_year`, one per projected period
pub fn future_years(last_year: i32, years_forward: usize) -> Result<Vec<i32>> {
    if years_forward == 0 {
        return Err(ForecastError::InvalidInput(
            "years_forward must be positive".to_string(),
        ));
    }

    let horizon = i32::try_from(years_forward).map_err(|_| {
        ForecastError::InvalidInput(format!("years_forward {} is too large", years_forward))
    })?;
    let end = last_year.checked_add(horizon).ok_or_else(|| {
        ForecastError::InvalidInput(format!(
            "Projecting {} years past {} overflows the calendar",
            years_forward, last_year
        ))
    })?;

    Ok((last_year + 1..=end).collect())
}
