pub mod constants;
pub mod error;
pub mod geometry;
pub mod info;

pub use constants::*;
pub use error::{PlanError, Result};
pub use geometry::CellBounds;
pub use info::MapInfo;
