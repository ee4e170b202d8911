use nalgebra::Vector4;

use super::DiscreteModel;

/// Kinematic bicycle model centered at the rear axle, Euler forward
/// discretization with midpoint velocity and heading terms.
///
/// The state vector is `[x, y, phi, v]`. The steering angle is derived from
/// the path curvature as `atan(kappa * wheel_base)` and, like the
/// acceleration, held constant over a prediction.
#[derive(Debug, Clone)]
pub struct KinematicBicycle {
    wheel_base: f64,
    steer_angle: f64,
    accel: f64,
}

impl KinematicBicycle {
    pub fn new(wheel_base: f64, kappa: f64, accel: f64) -> Self {
        KinematicBicycle {
            wheel_base,
            steer_angle: (kappa * wheel_base).atan(),
            accel,
        }
    }

    pub fn steer_angle(&self) -> f64 {
        self.steer_angle
    }
}

impl DiscreteModel for KinematicBicycle {
    type State = Vector4<f64>;

    fn f(&self, x: &Self::State, dt: f64) -> Self::State {
        let (x0, y0, phi, v) = (x[0], x[1], x[2], x[3]);
        let yaw_rate = self.steer_angle.tan() / self.wheel_base;
        let v_mid = v + 0.5 * dt * self.accel;
        let ang = phi + 0.5 * dt * v * yaw_rate;

        Vector4::new(
            x0 + dt * v_mid * ang.cos(),
            y0 + dt * v_mid * ang.sin(),
            phi + dt * v_mid * yaw_rate,
            v + dt * self.accel,
        )
    }
}
