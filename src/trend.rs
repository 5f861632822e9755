//! Ordinary least squares trend fitting

use crate::error::{Result, TrendError};
use crate::series::AnalysisSeries;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Linear trend fitted to an analysis series.
///
/// Immutable once fitted; all derived values are recomputed from the three
/// parameters rather than cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendFit {
    intercept: f64,
    slope: f64,
    residual_std_dev: f64,
}

impl TrendFit {
    /// Fit a straight line to the series by ordinary least squares.
    ///
    /// The fit regresses value on day index. The residual standard deviation
    /// is the sample (n-1) standard deviation of the per-point residuals.
    pub fn fit(series: &AnalysisSeries) -> Result<Self> {
        let xs: Vec<f64> = series
            .points()
            .iter()
            .map(|p| p.time_index() as f64)
            .collect();
        let ys: Vec<f64> = series.points().iter().map(|p| p.value()).collect();

        let x_mean = xs.iter().mean();
        let y_mean = ys.iter().mean();

        let mut numerator = 0.0;
        let mut denominator = 0.0;
        for (x, y) in xs.iter().zip(ys.iter()) {
            numerator += (x - x_mean) * (y - y_mean);
            denominator += (x - x_mean) * (x - x_mean);
        }

        if denominator.abs() < 1e-10 {
            return Err(TrendError::DegenerateSeries(
                "time axis has zero variance; need at least two distinct dates".to_string(),
            ));
        }

        let slope = numerator / denominator;
        let intercept = y_mean - slope * x_mean;

        let residuals: Vec<f64> = xs
            .iter()
            .zip(ys.iter())
            .map(|(x, y)| y - (intercept + slope * x))
            .collect();
        let residual_std_dev = residuals.iter().std_dev();

        Ok(Self {
            intercept,
            slope,
            residual_std_dev,
        })
    }

    /// Value of the fitted line at day index zero
    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Change of the fitted line per day
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// Sample standard deviation of the residuals
    pub fn residual_std_dev(&self) -> f64 {
        self.residual_std_dev
    }

    /// Point on the fitted line at the given day index
    pub fn value_at(&self, time_index: i64) -> f64 {
        self.intercept + self.slope * time_index as f64
    }

    /// Trend value at each historical observation
    pub fn fitted_values(&self, series: &AnalysisSeries) -> Vec<f64> {
        series
            .points()
            .iter()
            .map(|p| self.value_at(p.time_index()))
            .collect()
    }

    /// Observed minus fitted value at each historical observation
    pub fn residuals(&self, series: &AnalysisSeries) -> Vec<f64> {
        series
            .points()
            .iter()
            .map(|p| p.value() - self.value_at(p.time_index()))
            .collect()
    }

    /// `(trend - sigma, trend + sigma)` at each historical observation, the
    /// uncertainty band drawn around the trend line
    pub fn noise_band(&self, series: &AnalysisSeries) -> Vec<(f64, f64)> {
        self.fitted_values(series)
            .into_iter()
            .map(|trend| {
                (
                    trend - self.residual_std_dev,
                    trend + self.residual_std_dev,
                )
            })
            .collect()
    }
}
