//! Error types for the price_trend crate

use thiserror::Error;

/// Custom error types for the price_trend crate
#[derive(Debug, Error)]
pub enum TrendError {
    /// Fewer than two valid historical points after normalization
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Zero variance on the time axis (fewer than two distinct dates)
    #[error("Degenerate series: {0}")]
    DegenerateSeries(String),

    /// Non-positive forecast horizon
    #[error("Invalid horizon: {0}")]
    InvalidHorizon(String),

    /// Zero current value while deriving the percent change
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Conversion rate, unit divisor or manual rate outside its valid range
    #[error("Invalid rate: {0}")]
    InvalidRate(String),

    /// Error parsing configuration
    #[error("Config error: {0}")]
    Config(String),

    /// Error serializing a report
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Error from IO operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, TrendError>;

impl From<toml::de::Error> for TrendError {
    fn from(err: toml::de::Error) -> Self {
        TrendError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for TrendError {
    fn from(err: serde_json::Error) -> Self {
        TrendError::Serialization(err.to_string())
    }
}
