use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;
use validator::Validate;

/// Errors raised while evaluating a turbine power curve
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TurbineError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// How output ramps between cut-in and rated speed
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum InterpolationMode {
    /// Output proportional to the fraction of the ramp covered
    #[default]
    Linear,
    /// Output proportional to the cube of that fraction
    Cubic,
}

impl InterpolationMode {
    /// Parse a mode name, rejecting anything other than `linear` or `cubic`
    pub fn parse(mode: &str) -> Result<Self, TurbineError> {
        mode.parse().map_err(|_| {
            tracing::warn!(mode, "rejected unknown interpolation option");
            TurbineError::InvalidArgument(format!(
                "unknown interpolation option '{mode}', choose 'linear' or 'cubic'"
            ))
        })
    }

    /// Shape the normalised ramp fraction (0.0-1.0)
    pub fn shape(&self, fraction: f64) -> f64 {
        match self {
            InterpolationMode::Linear => fraction,
            InterpolationMode::Cubic => fraction.powi(3),
        }
    }
}

/// Turbine thresholds and nameplate rating
///
/// Speeds are in m/s. `rated_power` is in whatever unit the caller wants the
/// output in (kW, MW, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TurbineSpec {
    /// Minimum wind speed at which the turbine produces power
    #[validate(range(min = 0.0))]
    pub cut_in_speed: f64,
    /// Wind speed at which rated power is reached
    #[validate(range(min = 0.0))]
    pub rated_speed: f64,
    /// Wind speed at and above which the turbine shuts down
    #[validate(range(min = 0.0))]
    pub cut_out_speed: f64,
    /// Maximum output
    #[validate(range(min = 0.0))]
    pub rated_power: f64,
}

impl Default for TurbineSpec {
    fn default() -> Self {
        Self {
            cut_in_speed: 3.0,
            rated_speed: 11.0,
            cut_out_speed: 25.0,
            rated_power: 15.0,
        }
    }
}

impl TurbineSpec {
    pub fn new(cut_in_speed: f64, rated_speed: f64, cut_out_speed: f64, rated_power: f64) -> Self {
        Self {
            cut_in_speed,
            rated_speed,
            cut_out_speed,
            rated_power,
        }
    }

    /// Check the thresholds describe a usable curve
    ///
    /// All fields must be finite and non-negative, and
    /// `cut_in_speed < rated_speed < cut_out_speed`.
    pub fn check(&self) -> Result<(), TurbineError> {
        let fields = [
            ("cut_in_speed", self.cut_in_speed),
            ("rated_speed", self.rated_speed),
            ("cut_out_speed", self.cut_out_speed),
            ("rated_power", self.rated_power),
        ];
        if let Some((name, value)) = fields.iter().find(|(_, v)| !v.is_finite()) {
            return Err(self.reject(format!("{name} must be finite, got {value}")));
        }

        if let Err(errors) = Validate::validate(self) {
            let mut fields: Vec<String> = errors
                .field_errors()
                .keys()
                .map(|field| field.to_string())
                .collect();
            fields.sort();
            return Err(self.reject(format!(
                "turbine parameters must be non-negative: {}",
                fields.join(", ")
            )));
        }

        if self.cut_in_speed >= self.rated_speed {
            return Err(self.reject(format!(
                "cut_in_speed ({}) must be below rated_speed ({})",
                self.cut_in_speed, self.rated_speed
            )));
        }

        if self.rated_speed >= self.cut_out_speed {
            return Err(self.reject(format!(
                "rated_speed ({}) must be below cut_out_speed ({})",
                self.rated_speed, self.cut_out_speed
            )));
        }

        Ok(())
    }

    /// Power output at `wind_speed`
    pub fn power_output(&self, wind_speed: f64, mode: InterpolationMode) -> Result<f64, TurbineError> {
        self.check()?;
        check_wind_speed(wind_speed)?;
        Ok(self.evaluate(wind_speed, mode))
    }

    /// Piecewise curve without validation; callers must have checked `self`
    pub(crate) fn evaluate(&self, wind_speed: f64, mode: InterpolationMode) -> f64 {
        if wind_speed < self.cut_in_speed || wind_speed >= self.cut_out_speed {
            tracing::debug!(wind_speed, "outside operating range");
            return 0.0;
        }

        if wind_speed < self.rated_speed {
            let fraction =
                (wind_speed - self.cut_in_speed) / (self.rated_speed - self.cut_in_speed);
            tracing::debug!(wind_speed, fraction, %mode, "ramp region");
            return self.rated_power * mode.shape(fraction);
        }

        tracing::debug!(wind_speed, "rated region");
        self.rated_power
    }

    fn reject(&self, reason: String) -> TurbineError {
        tracing::warn!(spec = ?self, %reason, "rejected turbine spec");
        TurbineError::InvalidConfiguration(reason)
    }
}

pub(crate) fn check_wind_speed(wind_speed: f64) -> Result<(), TurbineError> {
    if wind_speed.is_nan() {
        tracing::warn!("rejected NaN wind speed");
        return Err(TurbineError::InvalidArgument(
            "wind speed must be a number".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_spec_is_valid() {
        let spec = TurbineSpec::default();
        assert_eq!(spec.rated_power, 15.0);
        assert!(spec.check().is_ok());
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!(InterpolationMode::parse("linear"), Ok(InterpolationMode::Linear));
        assert_eq!(InterpolationMode::parse("cubic"), Ok(InterpolationMode::Cubic));
        assert!(matches!(
            InterpolationMode::parse("Cubic"),
            Err(TurbineError::InvalidArgument(_))
        ));
        assert!(matches!(
            InterpolationMode::parse(""),
            Err(TurbineError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_mode_display_round_trips_through_parse() {
        for mode in InterpolationMode::iter() {
            assert_eq!(InterpolationMode::parse(&mode.to_string()), Ok(mode));
        }
    }

    #[test]
    fn test_mode_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&InterpolationMode::Cubic).unwrap();
        assert_eq!(json, "\"cubic\"");
        let mode: InterpolationMode = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(mode, InterpolationMode::Linear);
    }

    #[test]
    fn test_shape() {
        assert_eq!(InterpolationMode::Linear.shape(0.5), 0.5);
        assert_eq!(InterpolationMode::Cubic.shape(0.5), 0.125);
        assert_eq!(InterpolationMode::Cubic.shape(1.0), 1.0);
    }

    #[test]
    fn test_cut_in_not_below_rated_is_rejected() {
        let spec = TurbineSpec::new(12.0, 12.0, 25.0, 1500.0);
        assert!(matches!(
            spec.check(),
            Err(TurbineError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_rated_not_below_cut_out_is_rejected() {
        let spec = TurbineSpec::new(3.0, 25.0, 25.0, 1500.0);
        assert!(matches!(
            spec.check(),
            Err(TurbineError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_negative_parameter_is_rejected() {
        let spec = TurbineSpec::new(3.0, 12.0, 25.0, -1.0);
        let err = spec.check().unwrap_err();
        assert!(matches!(err, TurbineError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("rated_power"));
    }

    #[test]
    fn test_nan_parameter_is_rejected() {
        let spec = TurbineSpec::new(f64::NAN, 12.0, 25.0, 1500.0);
        let err = spec.check().unwrap_err();
        assert!(err.to_string().contains("cut_in_speed"));
    }

    #[test]
    fn test_nan_wind_speed_is_rejected() {
        let spec = TurbineSpec::default();
        assert!(matches!(
            spec.power_output(f64::NAN, InterpolationMode::Linear),
            Err(TurbineError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_infinite_wind_speed_produces_nothing() {
        let spec = TurbineSpec::default();
        assert_eq!(spec.power_output(f64::INFINITY, InterpolationMode::Linear), Ok(0.0));
        assert_eq!(spec.power_output(f64::NEG_INFINITY, InterpolationMode::Cubic), Ok(0.0));
    }

    #[test]
    fn test_regions() {
        let spec = TurbineSpec::new(3.0, 12.0, 25.0, 1500.0);
        let linear = InterpolationMode::Linear;
        assert_eq!(spec.power_output(2.9, linear), Ok(0.0));
        assert_eq!(spec.power_output(3.0, linear), Ok(0.0));
        assert_eq!(spec.power_output(7.5, linear), Ok(750.0));
        assert_eq!(spec.power_output(12.0, linear), Ok(1500.0));
        assert_eq!(spec.power_output(24.9, linear), Ok(1500.0));
        assert_eq!(spec.power_output(25.0, linear), Ok(0.0));
    }
}
