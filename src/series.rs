//! Normalized analysis series built from raw price feed data

use crate::error::{Result, TrendError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One sample as delivered by the external price feed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawObservation {
    /// Calendar date of the quote
    pub date: NaiveDate,
    /// Price in the source currency, `None` when the feed had no value
    pub price: Option<f64>,
}

impl RawObservation {
    /// Create a quoted observation
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self {
            date,
            price: Some(price),
        }
    }

    /// Create an observation whose price is missing
    pub fn missing(date: NaiveDate) -> Self {
        Self { date, price: None }
    }
}

/// One normalized sample with its derived day index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    date: NaiveDate,
    time_index: i64,
    value: f64,
}

impl Observation {
    /// Calendar date of the observation
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Whole days since the first date of the series
    pub fn time_index(&self) -> i64 {
        self.time_index
    }

    /// Value in target units
    pub fn value(&self) -> f64 {
        self.value
    }
}

/// Sorted, duplicate-free series of converted observations, ready for fitting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSeries {
    points: Vec<Observation>,
}

impl AnalysisSeries {
    /// Normalize a raw feed series into an analysis series.
    ///
    /// Points without a usable price (missing, non-finite or negative) are
    /// dropped. Remaining values are converted to target units via
    /// `price * conversion_rate / unit_divisor`, sorted by date, and indexed
    /// in whole days from the earliest retained date. When the feed quotes a
    /// date twice, the later quote supersedes the earlier one.
    pub fn normalize(
        raw: &[RawObservation],
        conversion_rate: f64,
        unit_divisor: f64,
    ) -> Result<Self> {
        if !conversion_rate.is_finite() || conversion_rate <= 0.0 {
            return Err(TrendError::InvalidRate(format!(
                "conversion rate must be a positive finite number, got {}",
                conversion_rate
            )));
        }
        if !unit_divisor.is_finite() || unit_divisor <= 0.0 {
            return Err(TrendError::InvalidRate(format!(
                "unit divisor must be a positive finite number, got {}",
                unit_divisor
            )));
        }

        let mut samples: Vec<(NaiveDate, f64)> = raw
            .iter()
            .filter_map(|obs| match obs.price {
                Some(price) if price.is_finite() && price >= 0.0 => Some((obs.date, price)),
                _ => None,
            })
            .collect();

        samples.sort_by_key(|(date, _)| *date);
        samples.dedup_by(|later, earlier| {
            if later.0 == earlier.0 {
                earlier.1 = later.1;
                true
            } else {
                false
            }
        });

        if samples.len() < 2 {
            return Err(TrendError::InsufficientData(format!(
                "need at least 2 valid observations, got {}",
                samples.len()
            )));
        }

        let first_date = samples[0].0;
        let points = samples
            .into_iter()
            .map(|(date, price)| Observation {
                date,
                time_index: date.signed_duration_since(first_date).num_days(),
                value: price * conversion_rate / unit_divisor,
            })
            .collect();

        Ok(Self { points })
    }

    /// Build a series from values already in target units.
    ///
    /// Pairs are taken in the order given and indexed from the first date;
    /// callers are expected to supply them in non-decreasing date order.
    pub fn from_observations(pairs: &[(NaiveDate, f64)]) -> Result<Self> {
        if pairs.len() < 2 {
            return Err(TrendError::InsufficientData(format!(
                "need at least 2 observations, got {}",
                pairs.len()
            )));
        }

        let first_date = pairs[0].0;
        let points = pairs
            .iter()
            .map(|&(date, value)| Observation {
                date,
                time_index: date.signed_duration_since(first_date).num_days(),
                value,
            })
            .collect();

        Ok(Self { points })
    }

    /// The normalized observations, oldest first
    pub fn points(&self) -> &[Observation] {
        &self.points
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether the series holds no observations
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest observation
    pub fn first(&self) -> Option<&Observation> {
        self.points.first()
    }

    /// Latest observation
    pub fn last(&self) -> Option<&Observation> {
        self.points.last()
    }

    /// Values in target units, oldest first
    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// Day indices, oldest first
    pub fn time_indices(&self) -> Vec<i64> {
        self.points.iter().map(|p| p.time_index).collect()
    }
}
