//! Pipeline configuration

use crate::error::Result;
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Grams per troy ounce, used to quote world prices per gram
pub const TROY_OUNCE_GRAMS: f64 = 31.1035;

/// Tunable parameters for a pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    /// Days to project beyond the last observation
    pub horizon_days: u32,
    /// Divisor applied after currency conversion (e.g. troy ounce to gram)
    pub unit_divisor: f64,
    /// Lower bound accepted for a manually entered rate
    pub manual_rate_min: f64,
    /// Upper bound accepted for a manually entered rate
    pub manual_rate_max: f64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon_days: 30,
            unit_divisor: TROY_OUNCE_GRAMS,
            manual_rate_min: 10_000.0,
            manual_rate_max: 20_000.0,
        }
    }
}

impl ForecastConfig {
    /// Parse a configuration from a TOML document; absent keys keep their
    /// default values
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Load a configuration from a TOML file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }
}

/// Preset lookback windows for loading historical data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HistoryWindow {
    SixMonths,
    OneYear,
    TwoYears,
    ThreeYears,
}

impl HistoryWindow {
    /// Window length in calendar days
    pub fn days(&self) -> i64 {
        match self {
            Self::SixMonths => 180,
            Self::OneYear => 365,
            Self::TwoYears => 365 * 2,
            Self::ThreeYears => 365 * 3,
        }
    }

    /// First date covered by the window ending at `today`
    pub fn start_date(&self, today: NaiveDate) -> NaiveDate {
        today - Duration::days(self.days())
    }
}
