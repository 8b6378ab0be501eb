//! Wire types for the prediction API.

pub mod request;
pub mod response;

pub use request::{Observation, PredictionRequest};
pub use response::PredictionResponse;
