//! # Wind Turbine Production
//!
//! Piecewise power curve driven by cut-in, rated and cut-out wind speeds.
//!
//! - Below cut-in and from cut-out upwards the turbine produces nothing
//! - Between cut-in and rated speed output ramps up (linear or cubic)
//! - Between rated and cut-out speed output is held at rated power

use serde::{Deserialize, Serialize};

use crate::domain::turbine::check_wind_speed;
use crate::domain::{InterpolationMode, TurbineError, TurbineSpec};

/// Power output of a turbine at `wind_speed`
///
/// `mode` must be `"linear"` or `"cubic"`; anything else is an
/// [`TurbineError::InvalidArgument`]. Thresholds that do not satisfy
/// `cut_in < rated_speed < cut_out` are an
/// [`TurbineError::InvalidConfiguration`].
///
/// ```
/// use wind_power_curve::compute_power_output;
///
/// let kw = compute_power_output(7.5, 3.0, 12.0, 25.0, 1500.0, "linear").unwrap();
/// assert_eq!(kw, 750.0);
/// ```
pub fn compute_power_output(
    wind_speed: f64,
    cut_in: f64,
    rated_speed: f64,
    cut_out: f64,
    rated_power: f64,
    mode: &str,
) -> Result<f64, TurbineError> {
    let mode = InterpolationMode::parse(mode)?;
    TurbineSpec::new(cut_in, rated_speed, cut_out, rated_power).power_output(wind_speed, mode)
}

/// Upper bound on the number of points [`PowerCurve::sample`] will produce
pub const MAX_SAMPLES: usize = 1_000_000;

/// One sample of a power curve
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Wind speed in m/s
    pub wind_speed: f64,
    /// Output at that speed
    pub power: f64,
}

/// A validated turbine spec paired with an interpolation mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerCurve {
    spec: TurbineSpec,
    mode: InterpolationMode,
}

impl PowerCurve {
    /// Validate `spec` once so repeated evaluations skip the checks
    pub fn new(spec: TurbineSpec, mode: InterpolationMode) -> Result<Self, TurbineError> {
        spec.check()?;
        Ok(Self { spec, mode })
    }

    pub fn spec(&self) -> &TurbineSpec {
        &self.spec
    }

    pub fn mode(&self) -> InterpolationMode {
        self.mode
    }

    /// Output at a single wind speed
    pub fn output(&self, wind_speed: f64) -> Result<f64, TurbineError> {
        check_wind_speed(wind_speed)?;
        Ok(self.spec.evaluate(wind_speed, self.mode))
    }

    /// Evaluate the curve from `start` to `end` (inclusive) every `step` m/s
    ///
    /// Speeds are computed as `start + i * step` so long tables do not drift.
    /// Tables longer than [`MAX_SAMPLES`] points are rejected.
    pub fn sample(&self, start: f64, end: f64, step: f64) -> Result<Vec<CurvePoint>, TurbineError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(reject_sample(format!(
                "sample range must be finite, got {start}..={end}"
            )));
        }
        if !step.is_finite() || step <= 0.0 {
            return Err(reject_sample(format!(
                "sample step must be positive, got {step}"
            )));
        }
        if end < start {
            return Err(reject_sample(format!(
                "sample range is empty: {start}..={end}"
            )));
        }

        // Relative tolerance keeps `end` when it is a multiple of `step`
        // without admitting a point past it
        let ratio = (end - start) / step;
        let intervals = (ratio + ratio * f64::EPSILON * 4.0).floor();
        if intervals >= MAX_SAMPLES as f64 {
            return Err(reject_sample(format!(
                "sample of {start}..={end} every {step} exceeds {MAX_SAMPLES} points"
            )));
        }

        let count = intervals as usize + 1;
        let points = (0..count)
            .map(|i| {
                let wind_speed = start + i as f64 * step;
                CurvePoint {
                    wind_speed,
                    power: self.spec.evaluate(wind_speed, self.mode),
                }
            })
            .collect::<Vec<_>>();

        tracing::debug!(
            points = points.len(),
            start,
            end,
            step,
            mode = %self.mode,
            "sampled power curve"
        );
        Ok(points)
    }

    /// Mean output over `wind_speeds` as a fraction of rated power
    ///
    /// Returns 0.0 for an empty series or a zero-rated turbine.
    pub fn capacity_factor(&self, wind_speeds: &[f64]) -> Result<f64, TurbineError> {
        if wind_speeds.is_empty() || self.spec.rated_power == 0.0 {
            return Ok(0.0);
        }

        let mut total = 0.0;
        for &speed in wind_speeds {
            total += self.output(speed)?;
        }
        Ok(total / wind_speeds.len() as f64 / self.spec.rated_power)
    }
}

fn reject_sample(reason: String) -> TurbineError {
    tracing::warn!(%reason, "rejected power curve sample range");
    TurbineError::InvalidArgument(reason)
}
