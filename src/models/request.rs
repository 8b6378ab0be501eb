//! Prediction request payload.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::Value;

use crate::error::AppError;

pub const FIELD_HISTORIES: &str = "historiesPerToken";
pub const FIELD_DAY: &str = "dateToPredict";

/// One history element. Older clients send `[y, date]` pairs, newer ones
/// send `{ds, y}` records; both deserialize through this single schema.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Observation {
    Record { ds: String, y: f64 },
    Pair(f64, String),
}

impl Observation {
    pub fn value(&self) -> f64 {
        match self {
            Observation::Record { y, .. } => *y,
            Observation::Pair(y, _) => *y,
        }
    }

    pub fn day(&self) -> &str {
        match self {
            Observation::Record { ds, .. } => ds,
            Observation::Pair(_, ds) => ds,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionRequest {
    #[serde(rename = "historiesPerToken")]
    pub histories: BTreeMap<String, Vec<Observation>>,

    #[serde(rename = "dateToPredict")]
    pub day: String,
}

impl PredictionRequest {
    /// Validates the raw body shape before deserializing, so the caller gets
    /// a message naming what is actually wrong (empty body vs missing
    /// fields) rather than a generic serde error.
    pub fn parse(raw: Value) -> Result<Self, AppError> {
        let fields = raw
            .as_object()
            .ok_or_else(|| AppError::Validation("request body must be a JSON object".into()))?;

        if fields.is_empty() {
            return Err(AppError::Validation("empty request body".into()));
        }

        let missing: Vec<&str> = [FIELD_HISTORIES, FIELD_DAY]
            .iter()
            .filter(|field| !fields.contains_key(**field))
            .copied()
            .collect();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "missing required field(s): {}",
                missing.join(", ")
            )));
        }

        serde_json::from_value(raw)
            .map_err(|err| AppError::Validation(format!("malformed request: {}", err)))
    }
}
