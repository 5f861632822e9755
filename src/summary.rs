//! KPI summary derived from the series and its forecast

use crate::error::{Result, TrendError};
use crate::forecast::ForecastSeries;
use crate::series::AnalysisSeries;
use serde::{Deserialize, Serialize};

/// Coarse direction of the projected trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrendDirection {
    /// Projected change is strictly positive
    Up,
    /// Projected change is zero or negative
    DownOrFlat,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::DownOrFlat => write!(f, "down or flat"),
        }
    }
}

/// Headline numbers for the forecast horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    current_value: f64,
    forecast_value: f64,
    percent_change: f64,
    direction: TrendDirection,
}

impl SummaryStats {
    /// Value of the last historical observation
    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    /// Trend value at the end of the horizon
    pub fn forecast_value(&self) -> f64 {
        self.forecast_value
    }

    /// Projected change over the horizon, in percent
    pub fn percent_change(&self) -> f64 {
        self.percent_change
    }

    /// Coarse direction classification
    pub fn direction(&self) -> TrendDirection {
        self.direction
    }
}

impl std::fmt::Display for SummaryStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Forecast Summary:")?;
        writeln!(f, "  Current value:  {:.2}", self.current_value)?;
        writeln!(f, "  Forecast value: {:.2}", self.forecast_value)?;
        writeln!(f, "  Change:         {:.2}%", self.percent_change)?;
        writeln!(f, "  Trend:          {}", self.direction)?;
        Ok(())
    }
}

/// Derive summary statistics from the last historical point and the last
/// forecast point.
///
/// The direction threshold sits at exactly zero: only a strictly positive
/// projected change classifies as `Up`.
pub fn summarize(series: &AnalysisSeries, forecast: &ForecastSeries) -> Result<SummaryStats> {
    let current_value = series
        .last()
        .ok_or_else(|| TrendError::InsufficientData("series has no observations".to_string()))?
        .value();
    let forecast_value = forecast
        .last()
        .ok_or_else(|| TrendError::InvalidHorizon("forecast has no points".to_string()))?
        .trend_value();

    if current_value == 0.0 {
        return Err(TrendError::DivisionByZero(
            "current value is zero; percent change is undefined".to_string(),
        ));
    }

    let percent_change = (forecast_value - current_value) / current_value * 100.0;
    let direction = if percent_change > 0.0 {
        TrendDirection::Up
    } else {
        TrendDirection::DownOrFlat
    };

    Ok(SummaryStats {
        current_value,
        forecast_value,
        percent_change,
        direction,
    })
}
