use std::{fs, path::Path};

use serde::Deserialize;
use tracing::debug;

use crate::error::ConfigError;
use crate::vehicle_state::VehicleState;

/// Vehicle model kinds known to the configuration layer. Only the
/// rear-centered kinematic bicycle model has an implementation; the others
/// are rejected at dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelType {
    RearCenteredKinematicBicycleModel,
    ComCenteredDynamicBicycleModel,
    MlpModel,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BicycleModelConfig {
    /// Integration step [s]
    pub dt: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ModelConfig {
    pub model_type: ModelType,
    pub rc_kinematic_bicycle_model: BicycleModelConfig,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct VehicleParam {
    /// Distance between the front and rear axles [m]
    pub wheel_base: f64,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PredictionConfig {
    /// Prediction duration [s]
    pub horizon: f64,
}

/// On-disk configuration document for the demo driver.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PredictorConfig {
    #[serde(flatten)]
    pub model: ModelConfig,
    pub vehicle_param: VehicleParam,
    pub prediction: PredictionConfig,
    #[serde(default)]
    pub initial_state: VehicleState,
}

impl PredictorConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        debug!(path = %path.display(), "loaded predictor config");
        Ok(config)
    }
}
