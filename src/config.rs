use anyhow::Result;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::{InterpolationMode, TurbineSpec};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub turbine: TurbineSpec,
    pub curve: CurveConfig,
    pub demo: DemoConfig,
}

/// Range and mode used when tabulating the curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurveConfig {
    pub mode: InterpolationMode,
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl Default for CurveConfig {
    fn default() -> Self {
        Self {
            mode: InterpolationMode::Linear,
            start: 0.0,
            end: 26.0,
            step: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub wind_speeds: Vec<f64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { wind_speeds: vec![7.0, 2.0, 11.0, 26.0] }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// `path` is optional on disk; `WPC__` environment variables override it
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("WPC__").split("__"));
        Ok(figment.extract()?)
    }
}
