use std::time::Instant;

use tracing::debug;

use super::Plan;

impl Plan {
    /// Build the static distance field inside the current bounds.
    ///
    /// Every obstacle cell (occupied or unknown) in the bounds splats the
    /// kernel onto `occ_dist` of its in-bounds neighbours, keeping the minimum.
    /// `occ_dist_dyn` is lowered alongside. The min-combine makes the result
    /// independent of the order sources are visited in, and running the build
    /// again on unchanged occupancy leaves every distance as it was.
    ///
    /// Only distances up to the kernel half-width are computed. Cells outside
    /// the bounds keep whatever distance they had.
    pub fn build_static_cspace(&mut self) {
        let start = Instant::now();
        let Self {
            grid,
            bounds,
            kernel,
            ..
        } = self;
        let bounds = *bounds;

        let mut sources = 0usize;
        for center in bounds.iter() {
            let idx = grid.index(center.x, center.y);
            if !grid.data()[idx].occ_state.is_obstacle() {
                continue;
            }
            sources += 1;

            kernel.for_each_in_bounds(center, &bounds, |neighbour, distance| {
                let idx = grid.index(neighbour.x, neighbour.y);
                let cell = &mut grid.data_mut()[idx];
                if distance < cell.occ_dist {
                    cell.occ_dist = distance;
                    cell.occ_dist_dyn = distance;
                }
            });
        }

        debug!(
            sources,
            kernel_width = kernel.width(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "built static c-space"
        );
    }
}
