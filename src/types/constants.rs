/// ROS occupancy value for unknown cells.
pub const ROS_UNKNOWN: i8 = -1;
pub const ROS_FREE: i8 = 0;
pub const ROS_OCCUPIED: i8 = 100;

pub const DEFAULT_OCCUPIED_THRESH: f32 = 0.65;

/// Unset value for cell distances and plan costs.
pub const PLAN_MAX_COST: f32 = 1e9;
