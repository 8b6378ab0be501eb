//! Prediction orchestration.

mod orchestrator;

pub use orchestrator::PredictionService;
