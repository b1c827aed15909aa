use glam::{IVec2, Vec2};

use crate::types::{MapInfo, Result};

/// Dense row-major grid: cell `(i, j)` lives at `i + j * width`.
#[derive(Debug, Clone)]
pub struct Grid2d<T> {
    info: MapInfo,
    data: Vec<T>,
}

impl<T> Grid2d<T> {
    /// Build a grid with no cells. Conversions still work, every cell lookup fails.
    pub fn empty(info: MapInfo) -> Self {
        Self {
            info: MapInfo {
                width: 0,
                height: 0,
                ..info
            },
            data: Vec::new(),
        }
    }

    /// Build a grid where every cell is produced by `f(i, j)`.
    ///
    /// The backing storage is reserved up front so an oversized grid surfaces as
    /// [`PlanError::Allocation`](crate::types::PlanError::Allocation) instead of aborting.
    pub fn from_fn(info: MapInfo, mut f: impl FnMut(i32, i32) -> T) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(info.len())?;
        for j in 0..info.height as i32 {
            for i in 0..info.width as i32 {
                data.push(f(i, j));
            }
        }
        Ok(Self { info, data })
    }

    pub fn info(&self) -> &MapInfo {
        &self.info
    }

    pub fn width(&self) -> u32 {
        self.info.width
    }

    pub fn height(&self) -> u32 {
        self.info.height
    }

    #[inline]
    pub fn in_grid(&self, i: i32, j: i32) -> bool {
        i >= 0 && j >= 0 && (i as u32) < self.info.width && (j as u32) < self.info.height
    }

    /// Linear offset of `(i, j)`. Only meaningful when [`Self::in_grid`] holds.
    #[inline]
    pub fn index(&self, i: i32, j: i32) -> usize {
        debug_assert!(self.in_grid(i, j), "cell ({i}, {j}) outside grid");
        (i as usize) + (j as usize) * (self.info.width as usize)
    }

    pub fn get(&self, i: i32, j: i32) -> Option<&T> {
        if !self.in_grid(i, j) {
            return None;
        }
        let idx = self.index(i, j);
        Some(&self.data[idx])
    }

    pub fn get_mut(&mut self, i: i32, j: i32) -> Option<&mut T> {
        if !self.in_grid(i, j) {
            return None;
        }
        let idx = self.index(i, j);
        Some(&mut self.data[idx])
    }

    /// Cell index along x for a world coordinate, rounding to the nearest cell (halves up).
    ///
    /// Non-finite inputs saturate (NaN becomes 0); callers that care check
    /// finiteness first.
    #[inline]
    pub fn world_to_grid_x(&self, x: f32) -> i32 {
        ((x - self.info.origin.x) / self.info.scale + 0.5).floor() as i32
    }

    #[inline]
    pub fn world_to_grid_y(&self, y: f32) -> i32 {
        ((y - self.info.origin.y) / self.info.scale + 0.5).floor() as i32
    }

    #[inline]
    pub fn grid_to_world_x(&self, i: i32) -> f32 {
        self.info.origin.x + i as f32 * self.info.scale
    }

    #[inline]
    pub fn grid_to_world_y(&self, j: i32) -> f32 {
        self.info.origin.y + j as f32 * self.info.scale
    }

    pub fn world_to_map(&self, pos: Vec2) -> IVec2 {
        IVec2::new(self.world_to_grid_x(pos.x), self.world_to_grid_y(pos.y))
    }

    pub fn data(&self) -> &[T] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}
