//! Planner configuration loaded from YAML.
//!
//! ```yaml
//! abs_min_radius: 0.25
//! max_radius: 1.0
//! distance_penalty: 2.0
//! hysteresis_factor: 0.5
//! grid:
//!   width: 400
//!   height: 300
//!   origin: [-10.0, -7.5]
//!   scale: 0.05
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::plan::Plan;
use crate::types::{PlanError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Hard clearance radius (world units) used by the search.
    #[serde(default = "default_abs_min_radius")]
    pub abs_min_radius: f32,
    /// Radius (world units) out to which obstacle distances are computed.
    #[serde(default = "default_max_radius")]
    pub max_radius: f32,
    #[serde(default = "default_distance_penalty")]
    pub distance_penalty: f32,
    #[serde(default = "default_hysteresis_factor")]
    pub hysteresis_factor: f32,
    #[serde(default)]
    pub grid: Option<GridConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub width: u32,
    pub height: u32,
    /// World coordinates of cell (0, 0).
    #[serde(default)]
    pub origin: [f32; 2],
    /// World units per cell.
    pub scale: f32,
}

fn default_abs_min_radius() -> f32 {
    0.5
}

fn default_max_radius() -> f32 {
    1.0
}

fn default_distance_penalty() -> f32 {
    1.0
}

fn default_hysteresis_factor() -> f32 {
    0.5
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            abs_min_radius: default_abs_min_radius(),
            max_radius: default_max_radius(),
            distance_penalty: default_distance_penalty(),
            hysteresis_factor: default_hysteresis_factor(),
            grid: None,
        }
    }
}

impl PlannerConfig {
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let yaml = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&yaml)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("abs_min_radius", self.abs_min_radius),
            ("max_radius", self.max_radius),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(PlanError::InvalidArgument(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Plan {
    /// Build a planner from configuration. With a `grid` section the grid is
    /// allocated and initialized, ready for occupancy.
    pub fn from_config(config: &PlannerConfig) -> Result<Self> {
        config.validate()?;
        let mut plan = Plan::new(
            config.abs_min_radius,
            config.max_radius,
            config.distance_penalty,
            config.hysteresis_factor,
        )?;

        if let Some(grid) = config.grid {
            plan.set_grid(
                grid.width,
                grid.height,
                grid.origin[0],
                grid.origin[1],
                grid.scale,
            )?;
            plan.init();
        }

        Ok(plan)
    }
}
