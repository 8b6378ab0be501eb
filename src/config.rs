//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Minimum daily-grid length before the ETS backend is used;
    /// shorter histories fall back to the trend model.
    pub ets_min_points: usize,

    /// Redirect stdout/stderr to /dev/null while a model is fitting.
    pub quiet_fit: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            ets_min_points: env::var("ETS_MIN_POINTS")
                .ok()
                .and_then(|n| n.parse().ok())
                .unwrap_or(10),

            quiet_fit: env::var("QUIET_FIT")
                .ok()
                .and_then(|q| q.parse().ok())
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            ets_min_points: 10,
            quiet_fit: true,
        }
    }
}
