use thiserror::Error;

use crate::config::ModelType;

/// Failures surfaced by [`predict`](crate::predictor::predict) before or
/// instead of producing a state.
#[derive(Debug, Error)]
pub enum PredictError {
    #[error("model type {0:?} is not implemented")]
    UnsupportedModel(ModelType),
    #[error("integration step must be positive, got dt = {0}")]
    NonPositiveDt(f64),
    #[error("wheel base must be positive, got {0} m")]
    NonPositiveWheelBase(f64),
    #[error("prediction horizon must be non-negative, got {0} s")]
    NegativeHorizon(f64),
}

/// Failures while loading a predictor configuration from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}
