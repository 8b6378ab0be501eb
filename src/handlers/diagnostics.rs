//! Built-in smoke test.
//!
//! `GET /test` runs the full orchestrator path over a fixed dataset against
//! the current timestamp, so the engine's availability can be checked
//! without a caller-supplied body.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use chrono::Utc;

use super::predict;
use crate::error::AppResult;
use crate::models::{Observation, PredictionResponse};
use crate::AppState;

pub async fn smoke_test(State(state): State<AppState>) -> AppResult<Json<PredictionResponse>> {
    let day = Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string();
    predict::run(state, fixture_histories(), day).await
}

/// A flat line, a step up, a step down and a wave.
fn fixture_histories() -> BTreeMap<String, Vec<Observation>> {
    fn history(points: &[(&str, f64)]) -> Vec<Observation> {
        points
            .iter()
            .map(|(ds, y)| Observation::Record {
                ds: ds.to_string(),
                y: *y,
            })
            .collect()
    }

    BTreeMap::from([
        (
            "line1".to_string(),
            history(&[("2021-11-01", 1.0), ("2021-11-02", 1.0)]),
        ),
        (
            "up1".to_string(),
            history(&[("2021-11-01", 0.0), ("2021-11-02", 1.0)]),
        ),
        (
            "down1".to_string(),
            history(&[("2021-11-01", 1.0), ("2021-11-02", 0.0)]),
        ),
        (
            "wave".to_string(),
            history(&[
                ("2021-11-01", 0.0),
                ("2021-11-02", 0.7),
                ("2021-11-03", 1.0),
                ("2021-11-04", 0.7),
                ("2021-11-05", 0.0),
                ("2021-11-06", 0.7),
                ("2021-11-07", 1.0),
                ("2021-11-08", 0.7),
            ]),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_units() {
        let histories = fixture_histories();
        let units: Vec<&str> = histories.keys().map(String::as_str).collect();
        assert_eq!(units, vec!["down1", "line1", "up1", "wave"]);
        assert!(histories.values().all(|history| history.len() >= 2));
    }
}
