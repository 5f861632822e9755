use chrono::{Duration, NaiveDate};
use price_trend::config::ForecastConfig;
use price_trend::rates::ManualRate;
use price_trend::series::RawObservation;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Price Trend: Basic Forecasting Example");
    println!("======================================\n");

    println!("Creating sample data...");
    let raw = create_sample_series();
    println!("Sample data created: {} daily quotes\n", raw.len());

    let rates = ManualRate::new(16_000.0, 10_000.0, 20_000.0)?;
    let config = ForecastConfig {
        horizon_days: 30,
        ..ForecastConfig::default()
    };

    let report = price_trend::pipeline::run(&raw, &rates, &config)?;

    println!(
        "Fitted trend: value = {:.2} + {:.4} * day",
        report.fit().intercept(),
        report.fit().slope()
    );
    println!(
        "Residual noise (1 sigma): {:.2}\n",
        report.fit().residual_std_dev()
    );

    println!("{}", report.summary());

    println!("Last 5 forecast points:");
    let tail = report.forecast().points().len().saturating_sub(5);
    for point in &report.forecast().points()[tail..] {
        println!("  {}: {:.2}", point.date(), point.trend_value());
    }

    Ok(())
}

/// Create six months of noisy upward-trending USD quotes
fn create_sample_series() -> Vec<RawObservation> {
    let mut rng = StdRng::seed_from_u64(7);
    let noise = Normal::new(0.0, 12.0).unwrap();
    let start = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();

    (0..180)
        .map(|i| {
            let price = 2400.0 + 1.5 * i as f64 + noise.sample(&mut rng);
            RawObservation::new(start + Duration::days(i), price)
        })
        .collect()
}
