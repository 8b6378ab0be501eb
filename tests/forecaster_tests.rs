use chrono::NaiveDate;

use token_predictor::forecaster::ForecastEngine;
use token_predictor::models::Observation;

fn daily_history(start: &str, values: &[f64]) -> Vec<Observation> {
    let first: NaiveDate = start.parse().unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, y)| Observation::Record {
            ds: (first + chrono::Duration::days(i as i64)).to_string(),
            y: *y,
        })
        .collect()
}

fn day(raw: &str) -> NaiveDate {
    raw.parse().unwrap()
}

#[test]
fn test_long_noisy_ramp_goes_through_ets_backend() {
    let values: Vec<f64> = (0..30)
        .map(|i| 100.0 + i as f64 + (i as f64 * 2.3).sin() * 3.0)
        .collect();
    let history = daily_history("2021-10-01", &values);

    // Quiet fitting enabled to exercise the full silencer + fit path.
    let engine = ForecastEngine::new(10, true);
    let value = engine.predict(&history, day("2021-11-06")).unwrap();
    assert!(value.is_finite());
}

#[test]
fn test_short_history_uses_trend_model_exactly() {
    let history = daily_history("2021-11-01", &[2.0, 4.0, 6.0]);

    let engine = ForecastEngine::new(10, false);
    let value = engine.predict(&history, day("2021-11-06")).unwrap();
    assert!((value - 12.0).abs() < 1e-9);
}

#[test]
fn test_backcast_before_history_start() {
    let history = daily_history("2021-11-10", &[10.0, 11.0, 12.0]);

    let engine = ForecastEngine::new(10, false);
    let value = engine.predict(&history, day("2021-11-05")).unwrap();
    assert!((value - 5.0).abs() < 1e-9);
}

#[test]
fn test_gappy_history_is_interpolated_not_rejected() {
    let history = vec![
        Observation::Record {
            ds: "2021-11-01".into(),
            y: 1.0,
        },
        Observation::Record {
            ds: "2021-11-10".into(),
            y: 14.0,
        },
        Observation::Record {
            ds: "2021-11-20".into(),
            y: 20.0,
        },
    ];

    let engine = ForecastEngine::new(10, true);
    let value = engine.predict(&history, day("2021-11-25")).unwrap();
    assert!(value.is_finite());
}

#[test]
fn test_pair_and_record_forms_are_equivalent() {
    let records = daily_history("2021-11-01", &[5.0, 6.5, 8.0, 9.5]);
    let pairs: Vec<Observation> = records
        .iter()
        .map(|observation| Observation::Pair(observation.value(), observation.day().to_string()))
        .collect();

    let engine = ForecastEngine::new(10, false);
    let from_records = engine.predict(&records, day("2021-11-10")).unwrap();
    let from_pairs = engine.predict(&pairs, day("2021-11-10")).unwrap();
    assert!((from_records - from_pairs).abs() < 1e-12);
}

#[test]
fn test_constant_series_is_flat_forever() {
    let history = daily_history("2021-11-01", &[3.25; 14]);

    let engine = ForecastEngine::new(10, true);
    let value = engine.predict(&history, day("2030-01-01")).unwrap();
    assert_eq!(value, 3.25);
}
