pub mod config;
pub mod grid;
pub mod kernel;
pub mod plan;
pub mod types;

pub use config::{GridConfig, PlannerConfig};
pub use grid::{Grid2d, OccState, PlanCell};
pub use kernel::DistanceKernel;
pub use plan::{ObstacleStats, Plan};
pub use types::{CellBounds, MapInfo, PlanError, Result};
