//! Per-cell planner state.

use glam::IVec2;

use crate::types::{DEFAULT_OCCUPIED_THRESH, PLAN_MAX_COST, ROS_OCCUPIED};

/// Static occupancy of a cell.
///
/// Unknown space is treated as an obstacle when inflating, so only `Free`
/// cells are never used as distance sources.
#[repr(i8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum OccState {
    #[default]
    Free = -1,
    Unknown = 0,
    Occupied = 1,
}

impl OccState {
    /// Decode the signed encoding: negative is free, zero unknown, positive occupied.
    pub fn from_i8(value: i8) -> Self {
        match value {
            v if v < 0 => Self::Free,
            0 => Self::Unknown,
            _ => Self::Occupied,
        }
    }

    #[inline]
    pub fn as_i8(self) -> i8 {
        self as i8
    }

    /// Occupied and unknown cells both seed the distance field.
    #[inline]
    pub fn is_obstacle(self) -> bool {
        self.as_i8() >= 0
    }

    /// Map a ROS occupancy value (-1 unknown, 0..=100 probability) to a state.
    pub fn from_ros(value: i8) -> Self {
        let occupied_thresh = (DEFAULT_OCCUPIED_THRESH * ROS_OCCUPIED as f32).round() as i8;
        if value < 0 {
            Self::Unknown
        } else if value >= occupied_thresh {
            Self::Occupied
        } else {
            Self::Free
        }
    }
}

/// One grid cell.
///
/// The `occ_*` fields belong to the distance field. `plan_cost`, `plan_next`
/// and `lpathmark` are owned by the search that runs on top of it; this crate
/// only initializes and clears them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanCell {
    ci: i32,
    cj: i32,
    pub occ_state: OccState,
    /// Distance in world units to the nearest static obstacle.
    pub occ_dist: f32,
    pub occ_state_dyn: OccState,
    /// Distance in world units to the nearest static or live obstacle.
    pub occ_dist_dyn: f32,
    /// Set once a live obstacle has been splatted from this cell in the current update.
    pub mark: bool,
    pub plan_cost: f32,
    /// Index of the successor cell in the same grid, if any.
    pub plan_next: Option<usize>,
    pub lpathmark: bool,
}

impl Default for PlanCell {
    fn default() -> Self {
        Self::at(0, 0)
    }
}

impl PlanCell {
    pub(crate) fn at(ci: i32, cj: i32) -> Self {
        Self {
            ci,
            cj,
            occ_state: OccState::Free,
            occ_dist: PLAN_MAX_COST,
            occ_state_dyn: OccState::Free,
            occ_dist_dyn: PLAN_MAX_COST,
            mark: false,
            plan_cost: PLAN_MAX_COST,
            plan_next: None,
            lpathmark: false,
        }
    }

    #[inline]
    pub fn grid_i(&self) -> i32 {
        self.ci
    }

    #[inline]
    pub fn grid_j(&self) -> i32 {
        self.cj
    }

    #[inline]
    pub fn coords(&self) -> IVec2 {
        IVec2::new(self.ci, self.cj)
    }

    /// Copy the static pair into the dynamic pair and clear the mark.
    #[inline]
    pub(crate) fn reset_dynamic(&mut self) {
        self.occ_state_dyn = self.occ_state;
        self.occ_dist_dyn = self.occ_dist;
        self.mark = false;
    }

    #[inline]
    pub(crate) fn reset_search(&mut self) {
        self.plan_cost = PLAN_MAX_COST;
        self.plan_next = None;
    }
}
