//! # Production Simulation Module
//!
//! Models the physical production side of a generating asset.
//!
//! ## Components
//!
//! - **Wind**: Piecewise turbine power curve with cut-in, rated and cut-out speeds
//!
//! ## Usage
//!
//! ```rust
//! use wind_power_curve::domain::{InterpolationMode, TurbineSpec};
//! use wind_power_curve::simulation::PowerCurve;
//!
//! let spec = TurbineSpec::new(3.0, 12.0, 25.0, 1500.0);
//! let curve = PowerCurve::new(spec, InterpolationMode::Cubic).unwrap();
//!
//! assert_eq!(curve.output(7.5).unwrap(), 187.5);
//! let table = curve.sample(0.0, 26.0, 1.0).unwrap();
//! assert_eq!(table.len(), 27);
//! ```

pub mod wind;

pub use wind::{compute_power_output, CurvePoint, PowerCurve, MAX_SAMPLES};
