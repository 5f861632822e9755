//! End-to-end composition of the forecasting stages

use crate::config::ForecastConfig;
use crate::error::Result;
use crate::forecast::ForecastSeries;
use crate::rates::RateProvider;
use crate::series::{AnalysisSeries, RawObservation};
use crate::summary::{summarize, SummaryStats};
use crate::trend::TrendFit;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Combined output of one pipeline run, ready for the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    series: AnalysisSeries,
    fit: TrendFit,
    forecast: ForecastSeries,
    summary: SummaryStats,
}

impl AnalysisReport {
    /// The normalized historical series
    pub fn series(&self) -> &AnalysisSeries {
        &self.series
    }

    /// The fitted linear trend
    pub fn fit(&self) -> &TrendFit {
        &self.fit
    }

    /// The projected trend over the configured horizon
    pub fn forecast(&self) -> &ForecastSeries {
        &self.forecast
    }

    /// The headline numbers
    pub fn summary(&self) -> &SummaryStats {
        &self.summary
    }

    /// Serialize the whole report as JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Run normalize, fit, project and summarize over raw feed data.
///
/// Stages run in a fixed order; the first failing stage aborts the run and
/// its error is surfaced unchanged. No partial report is produced.
pub fn run(
    raw: &[RawObservation],
    rates: &dyn RateProvider,
    config: &ForecastConfig,
) -> Result<AnalysisReport> {
    let rate = rates.rate()?;

    let series = AnalysisSeries::normalize(raw, rate, config.unit_divisor)?;
    debug!(points = series.len(), rate, "normalized raw series");

    let fit = TrendFit::fit(&series)?;
    debug!(
        slope = fit.slope(),
        intercept = fit.intercept(),
        residual_std_dev = fit.residual_std_dev(),
        "fitted linear trend"
    );

    let forecast = ForecastSeries::project(&series, &fit, config.horizon_days)?;
    debug!(horizon_days = config.horizon_days, "projected trend forward");

    let summary = summarize(&series, &forecast)?;

    Ok(AnalysisReport {
        series,
        fit,
        forecast,
        summary,
    })
}
