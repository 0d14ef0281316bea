//! One-step linear trend forecasting over a test's value history.
//!
//! Not a general time-series model: the history is treated as y-values at
//! evenly spaced x-positions, which the caller guarantees by supplying one
//! value per acquisition event in chronological order. Duplicates and
//! sampling gaps are not specially handled.

use thiserror::Error;

use crate::models::TimeSeries;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ForecastError {
    /// Caller contract violation — there is no principled default value
    /// to forecast from, so this fails loudly instead of guessing.
    #[error("cannot forecast from an empty history")]
    EmptyHistory,
}

/// Project the next value of an ordered history by linear extrapolation.
///
/// A single-element history forecasts that value unchanged. Otherwise the
/// ordinary least-squares slope of the best-fit line through
/// `(0, y0), (1, y1), …` is added to the last value, and the result is
/// rounded to two decimals with `f64::round` (half away from zero).
pub fn forecast_next(history: &[f64]) -> Result<f64, ForecastError> {
    let n = history.len();
    if n == 0 {
        return Err(ForecastError::EmptyHistory);
    }
    if n == 1 {
        return Ok(history[0]);
    }

    let next = history[n - 1] + ols_slope(history);
    Ok((next * 100.0).round() / 100.0)
}

/// Forecast over a date-ordered series (history rows → ordered values →
/// one-step projection).
pub fn forecast_series(series: &TimeSeries) -> Result<f64, ForecastError> {
    forecast_next(&series.values())
}

/// Ordinary least-squares slope for y-values at x = 0, 1, …, n-1.
fn ols_slope(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let x_mean = (n - 1.0) / 2.0;
    let y_mean = values.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let dx = i as f64 - x_mean;
        covariance += dx * (y - y_mean);
        variance += dx * dx;
    }

    covariance / variance
}
