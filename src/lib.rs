//! # Price Trend
//!
//! A Rust library for fitting and forecasting a commodity price trend from
//! historical daily observations.
//!
//! ## Features
//!
//! - Series normalization (currency conversion, day indexing, dropping of
//!   unusable samples)
//! - Ordinary-least-squares trend fitting with residual noise estimation
//! - Forward projection of the fitted trend over a configurable horizon
//! - KPI summary (current value, forecast value, percent change, direction)
//! - Injected exchange-rate capability for deterministic runs
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::{Duration, NaiveDate};
//! use price_trend::config::ForecastConfig;
//! use price_trend::rates::FixedRate;
//! use price_trend::series::RawObservation;
//!
//! # fn main() -> price_trend::Result<()> {
//! let start = NaiveDate::from_ymd_opt(2024, 11, 4).unwrap();
//! let raw: Vec<RawObservation> = [2650.0, 2662.0, 2671.0, 2668.0]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, &price)| RawObservation::new(start + Duration::days(i as i64), price))
//!     .collect();
//!
//! let config = ForecastConfig {
//!     horizon_days: 7,
//!     ..ForecastConfig::default()
//! };
//! let report = price_trend::pipeline::run(&raw, &FixedRate(16_000.0), &config)?;
//!
//! println!("{}", report.summary());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod forecast;
pub mod pipeline;
pub mod rates;
pub mod series;
pub mod summary;
pub mod trend;

// Re-export commonly used types
pub use crate::config::ForecastConfig;
pub use crate::error::{Result, TrendError};
pub use crate::forecast::{ForecastPoint, ForecastSeries};
pub use crate::pipeline::AnalysisReport;
pub use crate::rates::{FixedRate, ManualRate, RateProvider};
pub use crate::series::{AnalysisSeries, Observation, RawObservation};
pub use crate::summary::{summarize, SummaryStats, TrendDirection};
pub use crate::trend::TrendFit;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
