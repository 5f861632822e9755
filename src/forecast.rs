//! Forward projection of a fitted trend

use crate::error::{Result, TrendError};
use crate::series::AnalysisSeries;
use crate::trend::TrendFit;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// One projected point, dated strictly after the last historical observation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    date: NaiveDate,
    trend_value: f64,
}

impl ForecastPoint {
    /// Calendar date of the projection
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Value of the extrapolated trend line
    pub fn trend_value(&self) -> f64 {
        self.trend_value
    }
}

/// Projected trend values over a fixed horizon of consecutive calendar days
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    points: Vec<ForecastPoint>,
    horizon_days: u32,
}

impl ForecastSeries {
    /// Extrapolate the fitted line `horizon_days` beyond the last observation.
    ///
    /// Dates are consecutive calendar days starting the day after the last
    /// historical date. Projected values are not clamped; a falling trend may
    /// extrapolate below zero.
    pub fn project(
        series: &AnalysisSeries,
        fit: &TrendFit,
        horizon_days: u32,
    ) -> Result<Self> {
        if horizon_days == 0 {
            return Err(TrendError::InvalidHorizon(
                "forecast horizon must be at least one day".to_string(),
            ));
        }

        let last = series.last().ok_or_else(|| {
            TrendError::InsufficientData("cannot project from an empty series".to_string())
        })?;

        let mut points = Vec::with_capacity(horizon_days as usize);
        for step in 1..=i64::from(horizon_days) {
            points.push(ForecastPoint {
                date: last.date() + Duration::days(step),
                trend_value: fit.value_at(last.time_index() + step),
            });
        }

        Ok(Self {
            points,
            horizon_days,
        })
    }

    /// The projected points, earliest first
    pub fn points(&self) -> &[ForecastPoint] {
        &self.points
    }

    /// Number of projected points
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the forecast holds no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Requested horizon in days
    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    /// Projection at the end of the horizon
    pub fn last(&self) -> Option<&ForecastPoint> {
        self.points.last()
    }
}
