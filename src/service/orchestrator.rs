//! Sequential per-unit prediction loop.

use std::collections::BTreeMap;
use std::time::Instant;

use crate::forecaster::{series, ForecastEngine, ForecastError};
use crate::models::Observation;

/// Runs the forecast engine once per unit and collects the results.
pub struct PredictionService {
    engine: ForecastEngine,
}

impl PredictionService {
    pub fn new(engine: ForecastEngine) -> Self {
        Self { engine }
    }

    /// One point forecast per unit, keyed by unit name. Units are processed
    /// strictly sequentially; the first failing unit aborts the whole batch
    /// and discards sibling results.
    pub fn predict_all(
        &self,
        histories: &BTreeMap<String, Vec<Observation>>,
        day: &str,
    ) -> Result<BTreeMap<String, f64>, ForecastError> {
        let target = series::parse_day(day)?;

        let mut predictions = BTreeMap::new();
        for (unit, observations) in histories {
            let started = Instant::now();
            let value = self.engine.predict(observations, target)?;
            tracing::debug!(
                unit = %unit,
                elapsed_ms = started.elapsed().as_millis() as u64,
                "unit fit-and-predict finished"
            );
            predictions.insert(unit.clone(), value);
        }

        Ok(predictions)
    }
}
