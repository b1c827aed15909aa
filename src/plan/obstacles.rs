use std::time::Instant;

use glam::Vec2;
use tracing::{debug, warn};

use super::Plan;
use crate::grid::OccState;

/// Outcome of one dynamic obstacle update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObstacleStats {
    /// Points whose kernel was splatted.
    pub splatted: usize,
    /// Points landing in a cell already splatted during this update.
    pub duplicates: usize,
    /// Points mapping outside the grid.
    pub out_of_grid: usize,
    /// Points with a NaN or infinite coordinate.
    pub non_finite: usize,
}

impl Plan {
    /// Copy the static occupancy and distance into the dynamic pair for every
    /// cell of the grid and clear all marks.
    pub fn reset_dynamic(&mut self) {
        for cell in self.grid.data_mut() {
            cell.reset_dynamic();
        }
    }

    /// Rebuild the dynamic layer from the static one plus live obstacle points.
    ///
    /// The reset covers the whole grid. Each point that lands in the grid marks
    /// its cell occupied at distance 0, then splats the kernel with a
    /// min-combine onto `occ_dist_dyn` of neighbours inside the current bounds.
    /// Cells outside the bounds therefore keep their static distance even when
    /// a live obstacle is near them.
    ///
    /// Points outside the grid or with non-finite coordinates are skipped and
    /// counted in the returned [`ObstacleStats`].
    pub fn apply_dynamic_obstacles(&mut self, points: &[Vec2]) -> ObstacleStats {
        self.update_obstacles(points.iter().copied())
    }

    /// Same as [`Plan::apply_dynamic_obstacles`] for interleaved `[x0, y0, x1, y1, ..]`
    /// coordinates. A trailing unpaired value is ignored.
    pub fn apply_dynamic_obstacles_xy(&mut self, coords: &[f32]) -> ObstacleStats {
        if coords.len() % 2 != 0 {
            warn!(
                len = coords.len(),
                "odd number of obstacle coordinates, ignoring the last value"
            );
        }
        self.update_obstacles(
            coords
                .chunks_exact(2)
                .map(|xy| Vec2::new(xy[0], xy[1])),
        )
    }

    fn update_obstacles(&mut self, points: impl Iterator<Item = Vec2>) -> ObstacleStats {
        let start = Instant::now();
        self.reset_dynamic();

        let Self {
            grid,
            bounds,
            kernel,
            ..
        } = self;
        let bounds = *bounds;
        let mut stats = ObstacleStats::default();

        for point in points {
            if !point.is_finite() {
                stats.non_finite += 1;
                continue;
            }
            let center = grid.world_to_map(point);
            if !grid.in_grid(center.x, center.y) {
                stats.out_of_grid += 1;
                continue;
            }

            let idx = grid.index(center.x, center.y);
            let cell = &mut grid.data_mut()[idx];
            if cell.mark {
                stats.duplicates += 1;
                continue;
            }
            cell.mark = true;
            cell.occ_state_dyn = OccState::Occupied;
            cell.occ_dist_dyn = 0.0;
            stats.splatted += 1;

            kernel.for_each_in_bounds(center, &bounds, |neighbour, distance| {
                let idx = grid.index(neighbour.x, neighbour.y);
                let cell = &mut grid.data_mut()[idx];
                if distance < cell.occ_dist_dyn {
                    cell.occ_dist_dyn = distance;
                }
            });
        }

        debug!(
            splatted = stats.splatted,
            duplicates = stats.duplicates,
            out_of_grid = stats.out_of_grid,
            non_finite = stats.non_finite,
            elapsed_us = start.elapsed().as_micros() as u64,
            "applied dynamic obstacles"
        );
        stats
    }
}
