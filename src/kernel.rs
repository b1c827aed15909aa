//! Precomputed distance stencils.
//!
//! A [`DistanceKernel`] stores, for every `(di, dj)` offset in a square
//! window around a center cell, the straight-line distance `hypot(di, dj) * scale`
//! in world units. Splatting a kernel over a grid with a min-combine gives an
//! approximate distance transform that is exact up to the kernel's half-width.

use glam::IVec2;

use crate::types::{CellBounds, PlanError, Result};

/// Convert a radius in world units to a half-width in cells.
///
/// Returns `ceil(radius / scale)`, or 0 for non-positive radius or scale.
/// Saturates at `u32::MAX`.
#[inline]
pub fn radius_to_cells(radius: f32, scale: f32) -> u32 {
    if scale <= 0.0 || radius <= 0.0 {
        return 0;
    }
    (radius / scale).ceil() as u32
}

#[derive(Debug, Clone, PartialEq)]
pub struct DistanceKernel {
    /// Side length in cells, always odd.
    width: usize,
    /// Row-major: `values[(dj + h) * width + (di + h)]`.
    values: Vec<f32>,
}

impl Default for DistanceKernel {
    fn default() -> Self {
        Self {
            width: 1,
            values: vec![0.0],
        }
    }
}

impl DistanceKernel {
    /// Largest half-width whose offsets and side length still fit in `i32`.
    pub const MAX_HALF_WIDTH: u32 = (i32::MAX as u32 - 1) / 2;

    /// Kernel covering every offset within `max_radius` (world units) along each axis.
    ///
    /// Fails with [`PlanError::InvalidArgument`] when the radius spans more than
    /// [`Self::MAX_HALF_WIDTH`] cells and with [`PlanError::Allocation`] when the
    /// stencil cannot be reserved.
    pub fn build(max_radius: f32, scale: f32) -> Result<Self> {
        let half_width = radius_to_cells(max_radius, scale);
        if half_width > Self::MAX_HALF_WIDTH {
            return Err(PlanError::InvalidArgument(format!(
                "max_radius {max_radius} at scale {scale} needs a kernel half-width of {half_width} cells, limit is {}",
                Self::MAX_HALF_WIDTH
            )));
        }

        let width = 2 * half_width as usize + 1;
        let len = width.checked_mul(width).ok_or_else(|| {
            PlanError::InvalidArgument(format!("kernel width {width} overflows the stencil size"))
        })?;
        let mut values = Vec::new();
        values.try_reserve_exact(len)?;
        fill_stencil(half_width as i32, scale, &mut values);

        Ok(Self { width, values })
    }

    /// Fixed 3x3 kernel, independent of the planner radius.
    pub fn three_by_three(scale: f32) -> Self {
        let mut values = Vec::with_capacity(9);
        fill_stencil(1, scale, &mut values);
        Self { width: 3, values }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn half_width(&self) -> i32 {
        (self.width / 2) as i32
    }

    /// Distance for an offset from the center, or `None` outside the stencil.
    #[inline]
    pub fn get(&self, di: i32, dj: i32) -> Option<f32> {
        let h = self.half_width();
        if di.abs() > h || dj.abs() > h {
            return None;
        }
        let idx = (dj + h) as usize * self.width + (di + h) as usize;
        Some(self.values[idx])
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Visit every stencil cell around `center` that falls inside `bounds`,
    /// passing the neighbour's cell coordinates and its kernel distance.
    ///
    /// Neighbours outside `bounds` are skipped, never clamped, so no
    /// out-of-range coordinate is handed to the callback.
    #[inline]
    pub fn for_each_in_bounds(
        &self,
        center: IVec2,
        bounds: &CellBounds,
        mut f: impl FnMut(IVec2, f32),
    ) {
        let h = self.half_width();
        // Clip the stencil window to the bounds.
        let dj_min = (bounds.min.y - center.y).max(-h);
        let dj_max = (bounds.max.y - center.y).min(h);
        let di_min = (bounds.min.x - center.x).max(-h);
        let di_max = (bounds.max.x - center.x).min(h);

        for dj in dj_min..=dj_max {
            let row = (dj + h) as usize * self.width;
            for di in di_min..=di_max {
                let value = self.values[row + (di + h) as usize];
                f(IVec2::new(center.x + di, center.y + dj), value);
            }
        }
    }
}

fn fill_stencil(h: i32, scale: f32, values: &mut Vec<f32>) {
    for dj in -h..=h {
        for di in -h..=h {
            values.push((di as f32).hypot(dj as f32) * scale);
        }
    }
}
