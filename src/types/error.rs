use std::collections::TryReserveError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("world point ({x}, {y}) is outside the grid")]
    OutOfGrid { x: f32, y: f32 },
    #[error("failed to reserve grid or kernel storage: {0}")]
    Allocation(#[from] TryReserveError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T, E = PlanError> = std::result::Result<T, E>;
