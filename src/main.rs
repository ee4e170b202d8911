use anyhow::Context;
use itertools::izip;
use tracing::info;
use vehicle_model::{config::PredictorConfig, plotting, predictor};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config_path = std::env::var("CONFIG_PATH")
        .unwrap_or_else(|_| "config/vehicle_model.toml".to_string());
    let config = PredictorConfig::from_file(&config_path)
        .with_context(|| format!("loading {config_path}"))?;

    let current = config.initial_state;
    let horizon = config.prediction.horizon;
    let trajectory =
        predictor::predict_trajectory(&config.model, &config.vehicle_param, horizon, &current)?;
    info!(steps = trajectory.len(), horizon, "prediction complete");

    let dt = config.model.rc_kinematic_bicycle_model.dt;
    let times = (1..=trajectory.len()).map(|i| i as f64 * dt);
    for (t, state) in izip!(times, &trajectory) {
        println!(
            "t = {t:5.2} s  x = {:8.3} m  y = {:8.3} m  heading = {:6.3} rad  v = {:6.3} m/s",
            state.x, state.y, state.heading, state.linear_velocity
        );
    }

    if std::env::args().any(|arg| arg == "--plot") {
        plotting::plot_trajectory(&current, &trajectory);
    }

    Ok(())
}
