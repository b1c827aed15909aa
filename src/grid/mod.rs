pub mod cell;
pub mod grid2d;

pub use cell::{OccState, PlanCell};
pub use grid2d::Grid2d;
