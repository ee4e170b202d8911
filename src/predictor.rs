pub mod models;

use nalgebra::Vector4;
use tracing::debug;

use crate::config::{ModelConfig, ModelType, VehicleParam};
use crate::error::PredictError;
use crate::vehicle_state::VehicleState;
use self::models::kinematic_bicycle::KinematicBicycle;
use self::models::DiscreteModel;

struct Rollout {
    model: KinematicBicycle,
    x: Vector4<f64>,
    dt: f64,
    steps: usize,
}

fn rollout(
    config: &ModelConfig,
    param: &VehicleParam,
    horizon: f64,
    current: &VehicleState,
) -> Result<Rollout, PredictError> {
    match config.model_type {
        ModelType::RearCenteredKinematicBicycleModel => {
            let dt = config.rc_kinematic_bicycle_model.dt;
            if dt <= 0.0 {
                return Err(PredictError::NonPositiveDt(dt));
            }
            if param.wheel_base <= 0.0 {
                return Err(PredictError::NonPositiveWheelBase(param.wheel_base));
            }
            if horizon < 0.0 {
                return Err(PredictError::NegativeHorizon(horizon));
            }
            Ok(Rollout {
                model: KinematicBicycle::new(
                    param.wheel_base,
                    current.kappa,
                    current.linear_acceleration,
                ),
                x: Vector4::new(current.x, current.y, current.heading, current.linear_velocity),
                dt,
                // Integer step count equivalent to `for (t = 0; t <= horizon;
                // t += dt)`; at least one step always runs.
                steps: (horizon / dt).floor() as usize + 1,
            })
        }
        other => {
            debug!(model_type = ?other, "model not implemented or not supported");
            Err(PredictError::UnsupportedModel(other))
        }
    }
}

/// Altitude is flattened to the ground plane; curvature and acceleration are
/// not evolved by the model and pass through from the input state.
fn predicted_state(x: &Vector4<f64>, current: &VehicleState) -> VehicleState {
    VehicleState {
        x: x[0],
        y: x[1],
        z: 0.0,
        heading: x[2],
        linear_velocity: x[3],
        linear_acceleration: current.linear_acceleration,
        kappa: current.kappa,
    }
}

/// Predict the vehicle state `horizon` seconds ahead of `current` by
/// fixed-step integration of the configured model.
pub fn predict(
    config: &ModelConfig,
    param: &VehicleParam,
    horizon: f64,
    current: &VehicleState,
) -> Result<VehicleState, PredictError> {
    let mut r = rollout(config, param, horizon, current)?;
    for _ in 0..r.steps {
        r.x = r.model.f(&r.x, r.dt);
    }
    Ok(predicted_state(&r.x, current))
}

/// Like [`predict`], but returns the state after every integration step. The
/// last entry equals the [`predict`] output for the same inputs.
pub fn predict_trajectory(
    config: &ModelConfig,
    param: &VehicleParam,
    horizon: f64,
    current: &VehicleState,
) -> Result<Vec<VehicleState>, PredictError> {
    let mut r = rollout(config, param, horizon, current)?;
    let mut states = Vec::with_capacity(r.steps);
    for _ in 0..r.steps {
        r.x = r.model.f(&r.x, r.dt);
        states.push(predicted_state(&r.x, current));
    }
    Ok(states)
}
