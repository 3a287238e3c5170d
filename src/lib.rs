pub mod config;
pub mod domain;
pub mod simulation;
pub mod telemetry;

pub use domain::{InterpolationMode, TurbineError, TurbineSpec};
pub use simulation::{compute_power_output, CurvePoint, PowerCurve};
