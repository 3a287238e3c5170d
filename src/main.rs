use anyhow::Result;
use strum::IntoEnumIterator;
use tracing::{info, warn};
use wind_power_curve::{compute_power_output, config, telemetry, InterpolationMode, PowerCurve};

use config::Config;
use telemetry::init_tracing;

fn main() -> Result<()> {
    init_tracing();

    let cfg = Config::load()?;
    let spec = cfg.turbine;
    info!(?spec, mode = %cfg.curve.mode, "loaded turbine configuration");

    for mode in InterpolationMode::iter() {
        let curve = PowerCurve::new(spec, mode)?;
        for &wind_speed in &cfg.demo.wind_speeds {
            let power = curve.output(wind_speed)?;
            info!(wind_speed, %mode, power, "power output");
        }
    }

    match compute_power_output(
        5.0,
        spec.cut_in_speed,
        spec.rated_speed,
        spec.cut_out_speed,
        spec.rated_power,
        "invalid",
    ) {
        Ok(power) => warn!(power, "unknown interpolation option was accepted"),
        Err(e) => info!(error = %e, "unknown interpolation option rejected"),
    }

    let curve = PowerCurve::new(spec, cfg.curve.mode)?;
    let table = curve.sample(cfg.curve.start, cfg.curve.end, cfg.curve.step)?;
    println!("{}", serde_json::to_string_pretty(&table)?);

    Ok(())
}
