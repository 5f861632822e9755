//! Exchange rate capability injected into the pipeline
//!
//! The engine never fetches a rate itself; callers hand it a provider. A live
//! HTTP lookup belongs to the data-loading layer, which is expected to retry
//! once and then surface the failure.

use crate::error::{Result, TrendError};

/// Source of the source-to-target currency conversion rate
pub trait RateProvider {
    /// Current conversion rate, in target currency units per source unit
    fn rate(&self) -> Result<f64>;
}

/// Fixed conversion rate, for deterministic runs and tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRate(pub f64);

impl RateProvider for FixedRate {
    fn rate(&self) -> Result<f64> {
        if !self.0.is_finite() || self.0 <= 0.0 {
            return Err(TrendError::InvalidRate(format!(
                "conversion rate must be a positive finite number, got {}",
                self.0
            )));
        }
        Ok(self.0)
    }
}

/// User-supplied rate validated against a configured range at construction
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManualRate {
    rate: f64,
}

impl ManualRate {
    /// Accept a manually entered rate if it falls within `[min, max]`
    pub fn new(rate: f64, min: f64, max: f64) -> Result<Self> {
        if !rate.is_finite() || rate < min || rate > max {
            return Err(TrendError::InvalidRate(format!(
                "manual rate {} outside allowed range {}..={}",
                rate, min, max
            )));
        }
        Ok(Self { rate })
    }
}

impl RateProvider for ManualRate {
    fn rate(&self) -> Result<f64> {
        Ok(self.rate)
    }
}
