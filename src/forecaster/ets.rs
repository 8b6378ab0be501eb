//! ETS forecasting backend.
//!
//! Thin wrapper over the `augurs` automatic exponential-smoothing model.
//! A fresh model is fitted per call; interval estimation is skipped because
//! only the point forecast is returned (skipping uncertainty is an
//! order-of-magnitude fit speedup).

use augurs::ets::{AutoETS, FittedAutoETS};
use augurs::prelude::*;

use super::ForecastError;

pub struct EtsBackend {
    fitted: FittedAutoETS,
}

impl EtsBackend {
    /// Fit a non-seasonal automatic ETS model to a daily series.
    pub fn fit(values: &[f64]) -> Result<Self, ForecastError> {
        let model = AutoETS::non_seasonal();
        let fitted = model
            .fit(values)
            .map_err(|err| ForecastError::FitFailed(err.to_string()))?;
        Ok(Self { fitted })
    }

    /// Point forecast `horizon` days past the end of the fitted series.
    pub fn predict_ahead(&self, horizon: usize) -> Result<f64, ForecastError> {
        let forecast = self
            .fitted
            .predict(horizon, None)
            .map_err(|err| ForecastError::FitFailed(err.to_string()))?;

        forecast
            .point
            .last()
            .copied()
            .ok_or_else(|| ForecastError::FitFailed("backend returned an empty forecast".into()))
    }
}
