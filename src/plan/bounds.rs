use glam::{IVec2, Vec2};
use tracing::trace;

use super::Plan;
use crate::types::{CellBounds, PlanError, Result};

impl Plan {
    /// Set the region of interest in cell indices (inclusive).
    ///
    /// Each coordinate is clamped into the grid independently. Fails without
    /// touching the current bounds if `min > max` on either axis.
    pub fn set_bounds(&mut self, min_i: i32, min_j: i32, max_i: i32, max_j: i32) -> Result<()> {
        if min_i > max_i || min_j > max_j {
            return Err(PlanError::InvalidArgument(format!(
                "bounds min ({min_i}, {min_j}) exceeds max ({max_i}, {max_j})"
            )));
        }
        if self.grid.info().is_empty() {
            return Err(PlanError::InvalidArgument(
                "cannot set bounds before the grid is allocated".to_string(),
            ));
        }

        let limit = IVec2::new(self.width() as i32 - 1, self.height() as i32 - 1);
        let min = IVec2::new(min_i, min_j).clamp(IVec2::ZERO, limit);
        let max = IVec2::new(max_i, max_j).clamp(IVec2::ZERO, limit);
        self.bounds = CellBounds::new(min, max);

        trace!(?min, ?max, "updated plan bounds");
        Ok(())
    }

    /// Fit the region of interest around two world points.
    ///
    /// The box enclosing both points is padded by `ceil(padding / scale) / 2`
    /// cells on every side, then grown symmetrically until each side spans at
    /// least `ceil(min_size / scale)` cells, or the grid edge stops it.
    pub fn set_region_of_interest(
        &mut self,
        padding: f32,
        min_size: f32,
        p0: Vec2,
        p1: Vec2,
    ) -> Result<()> {
        if !(padding.is_finite() && min_size.is_finite() && p0.is_finite() && p1.is_finite()) {
            return Err(PlanError::InvalidArgument(format!(
                "region of interest inputs must be finite (padding {padding}, min_size {min_size}, {p0}, {p1})"
            )));
        }
        if padding < 0.0 {
            return Err(PlanError::InvalidArgument(format!(
                "padding must be non-negative, got {padding}"
            )));
        }
        if self.grid.info().is_empty() {
            return Err(PlanError::InvalidArgument(
                "cannot set a region of interest before the grid is allocated".to_string(),
            ));
        }

        let scale = self.scale();
        let limit = IVec2::new(self.width() as i32 - 1, self.height() as i32 - 1);

        let g0 = self.grid.world_to_map(p0);
        let g1 = self.grid.world_to_map(p1);
        let min = g0.min(g1).clamp(IVec2::ZERO, limit);
        let max = g0.max(g1).clamp(IVec2::ZERO, limit);

        // The requested size can never exceed the smaller grid side.
        let min_cells = ((min_size / scale).ceil() as i32).min(limit.x.min(limit.y));
        let pad = (padding / scale).ceil() as i32 / 2;

        let (min_i, max_i) = fit_axis(min.x, max.x, pad, min_cells, limit.x);
        let (min_j, max_j) = fit_axis(min.y, max.y, pad, min_cells, limit.y);

        self.set_bounds(min_i, min_j, max_i, max_j)
    }
}

/// Pad `[lo, hi]` by `pad` and grow it to span at least `target` cells within `[0, limit]`.
///
/// Requires `0 <= lo <= hi <= limit` and `target <= limit`.
fn fit_axis(lo: i32, hi: i32, pad: i32, target: i32, limit: i32) -> (i32, i32) {
    let mut lo = lo.saturating_sub(pad).max(0);
    let mut hi = hi.saturating_add(pad).min(limit);

    let span = hi - lo;
    if span < target {
        let half = (target - span + 1) / 2;
        lo = (lo - half).max(0);
        hi = (hi + half).min(limit);

        // One edge is pinned to the grid; the other takes the remainder.
        if hi - lo < target {
            if lo == 0 {
                hi = target;
            } else {
                lo = hi - target;
            }
        }
    }

    (lo, hi)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(width: u32, height: u32, scale: f32) -> Plan {
        let mut plan = Plan::new(0.5, 1.0, 1.0, 0.5).unwrap();
        plan.set_grid(width, height, 0.0, 0.0, scale).unwrap();
        plan.init();
        plan
    }

    #[test]
    fn set_bounds_clamps_each_coordinate() {
        let mut plan = plan(10, 8, 1.0);
        plan.set_bounds(-5, 2, 20, 30).unwrap();
        assert_eq!(
            plan.bounds(),
            CellBounds::new(IVec2::new(0, 2), IVec2::new(9, 7))
        );
        plan.set_bounds(12, 9, 15, 10).unwrap();
        assert_eq!(
            plan.bounds(),
            CellBounds::new(IVec2::new(9, 7), IVec2::new(9, 7))
        );
    }

    #[test]
    fn set_bounds_rejects_inverted_and_keeps_previous() {
        let mut plan = plan(10, 10, 1.0);
        plan.set_bounds(1, 1, 5, 5).unwrap();
        let before = plan.bounds();
        assert!(matches!(
            plan.set_bounds(6, 1, 5, 5),
            Err(PlanError::InvalidArgument(_))
        ));
        assert!(plan.set_bounds(1, 6, 5, 5).is_err());
        assert_eq!(plan.bounds(), before);
    }

    #[test]
    fn set_bounds_requires_grid() {
        let mut plan = Plan::new(0.5, 1.0, 1.0, 0.5).unwrap();
        assert!(plan.set_bounds(0, 0, 1, 1).is_err());
    }

    #[test]
    fn fit_axis_pads_and_grows() {
        // Padding only.
        assert_eq!(fit_axis(4, 6, 2, 0, 19), (2, 8));
        // Symmetric growth with a ceil split.
        assert_eq!(fit_axis(5, 5, 0, 9, 19), (0, 10));
        assert_eq!(fit_axis(8, 10, 0, 5, 19), (6, 12));
        // Pinned low edge pushes the high edge.
        assert_eq!(fit_axis(1, 1, 0, 8, 19), (0, 8));
        // Pinned high edge pushes the low edge.
        assert_eq!(fit_axis(18, 19, 0, 8, 19), (11, 19));
        // Target equal to the whole axis.
        assert_eq!(fit_axis(3, 3, 0, 9, 9), (0, 9));
    }

    #[test]
    fn region_of_interest_encloses_points_with_padding() {
        let mut plan = plan(20, 20, 1.0);
        plan.set_region_of_interest(4.0, 0.0, Vec2::new(8.0, 5.0), Vec2::new(3.0, 9.0))
            .unwrap();
        assert_eq!(
            plan.bounds(),
            CellBounds::new(IVec2::new(1, 3), IVec2::new(10, 11))
        );
        assert!(plan.check_world_point_in_bounds(8.0, 5.0));
        assert!(plan.check_world_point_in_bounds(3.0, 9.0));
    }

    #[test]
    fn region_of_interest_meets_min_size() {
        let mut plan = plan(20, 20, 0.5);
        plan.set_region_of_interest(0.0, 3.0, Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0))
            .unwrap();
        let bounds = plan.bounds();
        assert!(bounds.max.x - bounds.min.x >= 6);
        assert!(bounds.max.y - bounds.min.y >= 6);
        assert!(bounds.contains(10, 10));
    }

    #[test]
    fn region_of_interest_min_size_larger_than_grid_terminates() {
        let mut plan = plan(6, 4, 1.0);
        plan.set_region_of_interest(0.0, 100.0, Vec2::new(1.0, 1.0), Vec2::new(1.0, 1.0))
            .unwrap();
        let bounds = plan.bounds();
        // min_cells is clamped to min(width, height) - 1.
        assert!(bounds.max.x - bounds.min.x >= 3);
        assert_eq!(bounds.max.y - bounds.min.y, 3);
        assert!(bounds.max.x <= 5 && bounds.max.y <= 3);
    }

    #[test]
    fn region_of_interest_outside_grid_is_clamped() {
        let mut plan = plan(10, 10, 1.0);
        plan.set_region_of_interest(0.0, 2.0, Vec2::new(50.0, 50.0), Vec2::new(60.0, 70.0))
            .unwrap();
        assert_eq!(
            plan.bounds(),
            CellBounds::new(IVec2::new(7, 7), IVec2::new(9, 9))
        );
    }

    #[test]
    fn region_of_interest_rejects_bad_input() {
        let mut plan = plan(10, 10, 1.0);
        let before = plan.bounds();
        assert!(plan
            .set_region_of_interest(f32::NAN, 1.0, Vec2::ZERO, Vec2::ONE)
            .is_err());
        assert!(plan
            .set_region_of_interest(1.0, 1.0, Vec2::new(f32::INFINITY, 0.0), Vec2::ONE)
            .is_err());
        assert!(plan
            .set_region_of_interest(-1.0, 1.0, Vec2::ZERO, Vec2::ONE)
            .is_err());
        assert_eq!(plan.bounds(), before);
    }
}
