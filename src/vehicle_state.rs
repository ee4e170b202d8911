use serde::Deserialize;

/// Snapshot of the vehicle pose and motion, referenced to the rear axle
/// center. Positions are in meters, `heading` in radians, velocity in m/s,
/// acceleration in m/s^2, `kappa` in 1/m.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct VehicleState {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub heading: f64,
    pub linear_velocity: f64,
    pub linear_acceleration: f64,
    /// Path curvature, inverse of the turning radius.
    pub kappa: f64,
}
