use assert_approx_eq::assert_approx_eq;
use chrono::{Duration, NaiveDate};
use price_trend::error::TrendError;
use price_trend::forecast::ForecastSeries;
use price_trend::series::AnalysisSeries;
use price_trend::trend::TrendFit;

fn day(offset: i64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() + Duration::days(offset)
}

fn fitted_series(values: &[f64]) -> (AnalysisSeries, TrendFit) {
    let pairs: Vec<(NaiveDate, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| (day(i as i64), v))
        .collect();
    let series = AnalysisSeries::from_observations(&pairs).unwrap();
    let fit = TrendFit::fit(&series).unwrap();
    (series, fit)
}

#[test]
fn zero_horizon_is_rejected() {
    let (series, fit) = fitted_series(&[100.0, 110.0, 120.0]);

    let err = ForecastSeries::project(&series, &fit, 0).unwrap_err();
    assert!(matches!(err, TrendError::InvalidHorizon(_)));
}

#[test]
fn one_day_horizon_lands_on_the_next_day() {
    let (series, fit) = fitted_series(&[100.0, 110.0, 120.0]);

    let forecast = ForecastSeries::project(&series, &fit, 1).unwrap();

    assert_eq!(forecast.len(), 1);
    let point = forecast.last().unwrap();
    assert_eq!(point.date(), day(3));
    assert_approx_eq!(point.trend_value(), 130.0);
}

#[test]
fn two_day_horizon_extends_the_line() {
    let (series, fit) = fitted_series(&[100.0, 110.0, 120.0]);

    let forecast = ForecastSeries::project(&series, &fit, 2).unwrap();

    assert_eq!(forecast.len(), 2);
    assert_eq!(forecast.horizon_days(), 2);
    assert_eq!(forecast.points()[0].date(), day(3));
    assert_approx_eq!(forecast.points()[0].trend_value(), 130.0);
    assert_eq!(forecast.points()[1].date(), day(4));
    assert_approx_eq!(forecast.points()[1].trend_value(), 140.0);
}

#[test]
fn forecast_dates_are_consecutive() {
    let (series, fit) = fitted_series(&[100.0, 104.0, 103.0, 109.0]);

    let forecast = ForecastSeries::project(&series, &fit, 30).unwrap();

    assert_eq!(forecast.len(), 30);
    for window in forecast.points().windows(2) {
        assert_eq!(window[1].date(), window[0].date() + Duration::days(1));
    }
    assert_eq!(forecast.points()[0].date(), day(4));
}

#[test]
fn projection_continues_from_the_last_day_index() {
    // Gap before the last observation: last index is 2, not 1
    let series =
        AnalysisSeries::from_observations(&[(day(0), 100.0), (day(2), 120.0)]).unwrap();
    let fit = TrendFit::fit(&series).unwrap();

    let forecast = ForecastSeries::project(&series, &fit, 1).unwrap();

    let point = forecast.last().unwrap();
    assert_eq!(point.date(), day(3));
    assert_approx_eq!(point.trend_value(), 130.0);
}

#[test]
fn falling_trend_may_project_below_zero() {
    let (series, fit) = fitted_series(&[100.0, 40.0]);

    let forecast = ForecastSeries::project(&series, &fit, 3).unwrap();

    // slope -60: day 2 -> -20, day 4 -> -140
    assert_approx_eq!(forecast.points()[0].trend_value(), -20.0);
    assert!(forecast.last().unwrap().trend_value() < 0.0);
}
