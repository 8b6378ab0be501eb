//! History normalization.
//!
//! Turns raw wire observations into a sorted (date, value) table and exposes
//! the regularly spaced daily series the forecasting backend consumes.

use chrono::{NaiveDate, NaiveDateTime};

use super::ForecastError;
use crate::models::Observation;

/// Parse a calendar date, tolerating a trailing time-of-day component
/// (the diagnostic endpoint targets the current timestamp).
pub fn parse_day(raw: &str) -> Result<NaiveDate, ForecastError> {
    raw.parse::<NaiveDate>()
        .or_else(|_| raw.parse::<NaiveDateTime>().map(|dt| dt.date()))
        .map_err(|source| ForecastError::DateParse {
            raw: raw.to_string(),
            source,
        })
}

/// A normalized history: sorted by date, one value per distinct date.
#[derive(Debug, Clone)]
pub struct Series {
    points: Vec<(NaiveDate, f64)>,
}

impl Series {
    /// Parse and sort the observations. On duplicate dates the observation
    /// appearing later in the input wins. Fewer than two distinct dates is
    /// not fittable.
    pub fn from_observations(observations: &[Observation]) -> Result<Self, ForecastError> {
        let mut parsed: Vec<(NaiveDate, f64)> = Vec::with_capacity(observations.len());
        for observation in observations {
            parsed.push((parse_day(observation.day())?, observation.value()));
        }
        parsed.sort_by_key(|(date, _)| *date);

        let mut points: Vec<(NaiveDate, f64)> = Vec::with_capacity(parsed.len());
        for (date, value) in parsed {
            match points.last_mut() {
                Some(last) if last.0 == date => last.1 = value,
                _ => points.push((date, value)),
            }
        }

        if points.len() < 2 {
            return Err(ForecastError::InsufficientHistory(points.len()));
        }

        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn first_date(&self) -> NaiveDate {
        self.points[0].0
    }

    pub fn last_date(&self) -> NaiveDate {
        self.points[self.points.len() - 1].0
    }

    /// Days from the first observation to `date`; negative for backcasts.
    pub fn day_offset(&self, date: NaiveDate) -> i64 {
        (date - self.first_date()).num_days()
    }

    /// Observed values on a daily grid from the first to the last date, with
    /// gap days filled by linear interpolation between neighbors.
    pub fn daily_values(&self) -> Vec<f64> {
        let mut values = Vec::new();
        for pair in self.points.windows(2) {
            let (start_date, start_value) = pair[0];
            let (end_date, end_value) = pair[1];
            let span = (end_date - start_date).num_days();
            for step in 0..span {
                let fraction = step as f64 / span as f64;
                values.push(start_value + (end_value - start_value) * fraction);
            }
        }
        values.push(self.points[self.points.len() - 1].1);
        values
    }

    /// Day offsets of the actual observations, for the trend model.
    pub fn day_offsets(&self) -> Vec<f64> {
        self.points
            .iter()
            .map(|(date, _)| self.day_offset(*date) as f64)
            .collect()
    }

    pub fn observed_values(&self) -> Vec<f64> {
        self.points.iter().map(|(_, value)| *value).collect()
    }
}
