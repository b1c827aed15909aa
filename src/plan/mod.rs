//! The planner's distance field.
//!
//! A [`Plan`] owns a dense grid of [`PlanCell`]s, the distance kernels, and
//! the active region of interest. Typical use:
//!
//! 1. [`Plan::new`], then [`Plan::set_grid`] and [`Plan::init`].
//! 2. Fill `occ_state` (for example with [`Plan::set_occupancy`]) and call
//!    [`Plan::build_static_cspace`].
//! 3. Every planning cycle, call [`Plan::apply_dynamic_obstacles`] and read
//!    `occ_dist_dyn` from the cells.
//!
//! Live obstacles are only inflated inside the current bounds. Outside the
//! region of interest `occ_dist_dyn` holds the static distance.

mod bounds;
mod cspace;
mod obstacles;

use glam::{IVec2, Vec2};
use tracing::info;

pub use obstacles::ObstacleStats;

use crate::grid::{Grid2d, OccState, PlanCell};
use crate::kernel::DistanceKernel;
use crate::types::{CellBounds, MapInfo, PLAN_MAX_COST, PlanError, Result};

pub struct Plan {
    abs_min_radius: f32,
    max_radius: f32,
    distance_penalty: f32,
    hysteresis_factor: f32,
    grid: Grid2d<PlanCell>,
    bounds: CellBounds,
    kernel: DistanceKernel,
    kernel_3x3: DistanceKernel,
}

impl Plan {
    /// Create a planner with no grid.
    ///
    /// `distance_penalty` and `hysteresis_factor` are kept for the search
    /// cost model and are not used here.
    pub fn new(
        abs_min_radius: f32,
        max_radius: f32,
        distance_penalty: f32,
        hysteresis_factor: f32,
    ) -> Result<Self> {
        check_radius("abs_min_radius", abs_min_radius)?;
        check_radius("max_radius", max_radius)?;

        Ok(Self {
            abs_min_radius,
            max_radius,
            distance_penalty,
            hysteresis_factor,
            grid: Grid2d::empty(MapInfo::default()),
            bounds: CellBounds::full(0, 0),
            kernel: DistanceKernel::default(),
            kernel_3x3: DistanceKernel::default(),
        })
    }

    /// Allocate a fresh `width` x `height` grid of free cells.
    ///
    /// Rebuilds both kernels for the new scale and resets the bounds to the
    /// full grid. On error, including a kernel too large to allocate at this
    /// scale, the planner is left unchanged.
    pub fn set_grid(
        &mut self,
        width: u32,
        height: u32,
        origin_x: f32,
        origin_y: f32,
        scale: f32,
    ) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(PlanError::InvalidArgument(format!(
                "grid dimensions must be positive, got {width}x{height}"
            )));
        }
        if !(scale.is_finite() && scale > 0.0) {
            return Err(PlanError::InvalidArgument(format!(
                "scale must be finite and positive, got {scale}"
            )));
        }
        if !(origin_x.is_finite() && origin_y.is_finite()) {
            return Err(PlanError::InvalidArgument(format!(
                "origin must be finite, got ({origin_x}, {origin_y})"
            )));
        }

        let info = MapInfo {
            width,
            height,
            scale,
            origin: Vec2::new(origin_x, origin_y),
        };
        let (kernel, kernel_3x3) = build_kernels(self.max_radius, scale)?;
        self.grid = Grid2d::from_fn(info, PlanCell::at)?;
        self.kernel = kernel;
        self.kernel_3x3 = kernel_3x3;
        self.bounds = CellBounds::full(width, height);
        Ok(())
    }

    /// Reset the per-cell search state, seed the dynamic layer from the
    /// static one and reset the bounds to the full grid.
    ///
    /// The kernels already match the current radius and scale, since
    /// [`Plan::set_grid`] and [`Plan::set_max_radius`] rebuild them.
    pub fn init(&mut self) {
        for cell in self.grid.data_mut() {
            cell.occ_state_dyn = cell.occ_state;
            cell.occ_dist_dyn = cell.occ_dist;
            cell.reset_search();
            cell.lpathmark = false;
        }

        self.bounds = CellBounds::full(self.grid.width(), self.grid.height());

        info!(
            width = self.grid.width(),
            height = self.grid.height(),
            scale = self.grid.info().scale,
            kernel_width = self.kernel.width(),
            "initialized planner grid"
        );
    }

    /// Clear `plan_cost`, `plan_next` and `mark` inside the current bounds.
    ///
    /// Distances are untouched; this is the cheap reset run before each search.
    pub fn reset(&mut self) {
        let Self { grid, bounds, .. } = self;
        for cell in bounds.iter() {
            let idx = grid.index(cell.x, cell.y);
            let cell = &mut grid.data_mut()[idx];
            cell.reset_search();
            cell.mark = false;
        }
    }

    /// Change the inflation radius and rebuild the kernel for it.
    ///
    /// Radius and kernel stay as they were if the new kernel cannot be built.
    pub fn set_max_radius(&mut self, max_radius: f32) -> Result<()> {
        check_radius("max_radius", max_radius)?;
        self.kernel = DistanceKernel::build(max_radius, self.scale())?;
        self.max_radius = max_radius;
        Ok(())
    }

    /// Set every cell's static occupancy, row-major.
    ///
    /// Static distances go back to unset; run [`Plan::build_static_cspace`] afterwards.
    pub fn set_occupancy(&mut self, states: &[OccState]) -> Result<()> {
        self.ingest(states.len(), |idx| states[idx])
    }

    /// Set every cell's static occupancy from ROS occupancy values
    /// (-1 unknown, 0..=100 occupancy probability).
    pub fn set_occupancy_from_ros(&mut self, values: &[i8]) -> Result<()> {
        self.ingest(values.len(), |idx| OccState::from_ros(values[idx]))
    }

    fn ingest(&mut self, len: usize, state_at: impl Fn(usize) -> OccState) -> Result<()> {
        let expected = self.grid.info().len();
        if len != expected {
            return Err(PlanError::InvalidArgument(format!(
                "occupancy length {len} does not match grid size {expected}"
            )));
        }
        for (idx, cell) in self.grid.data_mut().iter_mut().enumerate() {
            cell.occ_state = state_at(idx);
            cell.occ_dist = PLAN_MAX_COST;
            cell.reset_dynamic();
        }
        Ok(())
    }

    pub fn info(&self) -> &MapInfo {
        self.grid.info()
    }

    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    pub fn scale(&self) -> f32 {
        self.grid.info().scale
    }

    pub fn origin(&self) -> Vec2 {
        self.grid.info().origin
    }

    pub fn abs_min_radius(&self) -> f32 {
        self.abs_min_radius
    }

    pub fn max_radius(&self) -> f32 {
        self.max_radius
    }

    pub fn distance_penalty(&self) -> f32 {
        self.distance_penalty
    }

    pub fn hysteresis_factor(&self) -> f32 {
        self.hysteresis_factor
    }

    /// Current region of interest (inclusive).
    pub fn bounds(&self) -> CellBounds {
        self.bounds
    }

    /// Kernel sized to `max_radius`.
    pub fn kernel(&self) -> &DistanceKernel {
        &self.kernel
    }

    /// Fixed 3x3 kernel used by goal-distance propagation.
    pub fn kernel_3x3(&self) -> &DistanceKernel {
        &self.kernel_3x3
    }

    pub fn cells(&self) -> &[PlanCell] {
        self.grid.data()
    }

    pub fn cells_mut(&mut self) -> &mut [PlanCell] {
        self.grid.data_mut()
    }

    pub fn cell(&self, i: i32, j: i32) -> Option<&PlanCell> {
        self.grid.get(i, j)
    }

    pub fn cell_mut(&mut self, i: i32, j: i32) -> Option<&mut PlanCell> {
        self.grid.get_mut(i, j)
    }

    #[inline]
    pub fn world_to_grid_x(&self, x: f32) -> i32 {
        self.grid.world_to_grid_x(x)
    }

    #[inline]
    pub fn world_to_grid_y(&self, y: f32) -> i32 {
        self.grid.world_to_grid_y(y)
    }

    #[inline]
    pub fn grid_to_world_x(&self, i: i32) -> f32 {
        self.grid.grid_to_world_x(i)
    }

    #[inline]
    pub fn grid_to_world_y(&self, j: i32) -> f32 {
        self.grid.grid_to_world_y(j)
    }

    #[inline]
    pub fn in_grid(&self, i: i32, j: i32) -> bool {
        self.grid.in_grid(i, j)
    }

    #[inline]
    pub fn in_bounds(&self, i: i32, j: i32) -> bool {
        self.bounds.contains(i, j)
    }

    /// Linear offset of `(i, j)`; check [`Plan::in_grid`] first.
    #[inline]
    pub fn index(&self, i: i32, j: i32) -> usize {
        self.grid.index(i, j)
    }

    /// Grid cell for a world point, or [`PlanError::OutOfGrid`].
    pub fn world_to_cell(&self, point: Vec2) -> Result<IVec2> {
        let cell = self.grid.world_to_map(point);
        if point.is_finite() && self.grid.in_grid(cell.x, cell.y) {
            Ok(cell)
        } else {
            Err(PlanError::OutOfGrid {
                x: point.x,
                y: point.y,
            })
        }
    }

    /// Whether a world point falls inside the current region of interest.
    pub fn check_world_point_in_bounds(&self, x: f32, y: f32) -> bool {
        if !(x.is_finite() && y.is_finite()) {
            return false;
        }
        self.in_bounds(self.world_to_grid_x(x), self.world_to_grid_y(y))
    }
}

/// Copies the grid, its static and dynamic distances and both kernels. Search
/// state is reset as by [`Plan::init`] and the bounds cover the full grid.
impl Clone for Plan {
    fn clone(&self) -> Self {
        let mut grid = self.grid.clone();
        for cell in grid.data_mut() {
            cell.reset_search();
            cell.lpathmark = false;
            cell.mark = false;
        }
        let bounds = CellBounds::full(grid.width(), grid.height());

        Self {
            abs_min_radius: self.abs_min_radius,
            max_radius: self.max_radius,
            distance_penalty: self.distance_penalty,
            hysteresis_factor: self.hysteresis_factor,
            grid,
            bounds,
            kernel: self.kernel.clone(),
            kernel_3x3: self.kernel_3x3.clone(),
        }
    }
}

impl std::fmt::Debug for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Plan")
            .field("info", self.grid.info())
            .field("bounds", &self.bounds)
            .field("max_radius", &self.max_radius)
            .field("kernel_width", &self.kernel.width())
            .finish_non_exhaustive()
    }
}

fn build_kernels(max_radius: f32, scale: f32) -> Result<(DistanceKernel, DistanceKernel)> {
    Ok((
        DistanceKernel::build(max_radius, scale)?,
        DistanceKernel::three_by_three(scale),
    ))
}

fn check_radius(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(PlanError::InvalidArgument(format!(
            "{name} must be finite and non-negative, got {value}"
        )))
    }
}
