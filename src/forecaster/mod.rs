//! Per-unit fit-and-predict engine.
//!
//! Each invocation is a stateless transaction: normalize the history, fit a
//! fresh model, predict exactly one date. Nothing is cached across units or
//! requests.

pub mod ets;
pub mod series;
pub mod silence;
pub mod trend;

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::Observation;
use ets::EtsBackend;
use series::Series;
use silence::StdioSilencer;
use trend::TrendLine;

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("unparseable date '{raw}': {source}")]
    DateParse {
        raw: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("history has {0} distinct date(s), need at least 2")]
    InsufficientHistory(usize),

    #[error("model fit failed: {0}")]
    FitFailed(String),

    #[error("stream suppression failed: {0}")]
    Silence(#[from] std::io::Error),
}

/// Stateless forecast engine; cheap to clone, safe to share.
#[derive(Debug, Clone)]
pub struct ForecastEngine {
    ets_min_points: usize,
    quiet_fit: bool,
}

impl ForecastEngine {
    pub fn new(ets_min_points: usize, quiet_fit: bool) -> Self {
        Self {
            ets_min_points,
            quiet_fit,
        }
    }

    /// Fit a fresh model to `observations` and return the point forecast for
    /// `target`.
    ///
    /// Noisy histories long enough for the ETS backend, with a target past
    /// the end of the history, go through ETS with interval estimation
    /// skipped (point estimate only). Everything else — short histories,
    /// residual-free histories that are degenerate for likelihood fitting,
    /// in-range targets and backcasts — uses a least-squares trend line.
    /// The target date itself is never range checked.
    pub fn predict(
        &self,
        observations: &[Observation],
        target: NaiveDate,
    ) -> Result<f64, ForecastError> {
        let series = Series::from_observations(observations)?;

        let offsets = series.day_offsets();
        let observed = series.observed_values();
        let line = TrendLine::fit(&offsets, &observed);
        let horizon = (target - series.last_date()).num_days();

        let collinear = {
            let scale = observed.iter().fold(1.0_f64, |m, v| m.max(v.abs()));
            offsets
                .iter()
                .zip(&observed)
                .all(|(x, y)| (line.value_at(*x) - y).abs() <= 1e-9 * scale)
        };

        if !collinear && horizon >= 1 {
            let values = series.daily_values();
            if values.len() >= self.ets_min_points {
                tracing::debug!(
                    model = "ets",
                    points = values.len(),
                    horizon,
                    "fitting forecast model"
                );
                let fitted = {
                    let _quiet = if self.quiet_fit {
                        Some(StdioSilencer::acquire()?)
                    } else {
                        None
                    };
                    EtsBackend::fit(&values)?
                };
                return fitted.predict_ahead(horizon as usize);
            }
        }

        tracing::debug!(
            model = "trend",
            points = series.len(),
            horizon,
            "fitting forecast model"
        );
        Ok(line.value_at(series.day_offset(target) as f64))
    }
}
