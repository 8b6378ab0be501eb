//! Prediction response payload.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct PredictionResponse {
    /// One point forecast per requested unit.
    pub predictions: BTreeMap<String, f64>,

    /// The requested target date, echoed verbatim.
    pub day: String,
}
