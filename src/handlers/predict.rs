//! Prediction endpoint.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::models::{Observation, PredictionRequest, PredictionResponse};
use crate::AppState;

/// Predict one value per unit for the requested day.
///
/// The body is taken as raw JSON first so a missing or malformed body turns
/// into a 400 with our own message rather than the extractor's rejection.
pub async fn predict(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> AppResult<Json<PredictionResponse>> {
    let Json(raw) =
        body.ok_or_else(|| AppError::Validation("request body must be a JSON object".into()))?;
    let request = PredictionRequest::parse(raw)?;

    run(state, request.histories, request.day).await
}

/// Shared orchestration path for /predict and /test. Fitting is blocking
/// CPU work, so the whole per-unit loop moves off the async executor.
pub(crate) async fn run(
    state: AppState,
    histories: BTreeMap<String, Vec<Observation>>,
    day: String,
) -> AppResult<Json<PredictionResponse>> {
    let service = Arc::clone(&state.service);
    let target_day = day.clone();

    let predictions =
        tokio::task::spawn_blocking(move || service.predict_all(&histories, &target_day))
            .await
            .map_err(|err| AppError::Internal(format!("prediction task failed: {}", err)))??;

    Ok(Json(PredictionResponse { predictions, day }))
}
