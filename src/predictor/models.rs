pub mod kinematic_bicycle;

/// One-step discrete transition of a vehicle motion model.
pub trait DiscreteModel {
    type State;

    fn f(&self, x: &Self::State, dt: f64) -> Self::State;
}
