use gnuplot::*;

use crate::vehicle_state::VehicleState;

pub fn plot_trajectory(current: &VehicleState, trajectory: &[VehicleState]) {
    let mut fg = Figure::new();
    let ax = fg.axes2d();
    ax.lines(
        trajectory.iter().map(|s| s.x),
        trajectory.iter().map(|s| s.y),
        &[Caption("Predicted trajectory")],
    )
    .set_x_grid(true)
    .set_y_grid(true);
    ax.points(
        [current.x].iter(),
        [current.y].iter(),
        &[Caption("Current position")],
    );
    fg.show().unwrap();
}
