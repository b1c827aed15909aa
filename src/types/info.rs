//! Grid metadata.

use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapInfo {
    pub width: u32,
    pub height: u32,
    /// World units per cell, shared by both axes.
    pub scale: f32,
    /// World coordinates of cell (0, 0).
    pub origin: Vec2,
}

impl Default for MapInfo {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            scale: 0.0,
            origin: Vec2::ZERO,
        }
    }
}

impl MapInfo {
    /// Number of cells in the grid.
    #[inline]
    pub fn len(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Width of the map in world units.
    #[inline]
    pub fn world_width(&self) -> f32 {
        self.width as f32 * self.scale
    }

    /// Height of the map in world units.
    #[inline]
    pub fn world_height(&self) -> f32 {
        self.height as f32 * self.scale
    }

    /// Center of the map in world coordinates.
    #[inline]
    pub fn world_center(&self) -> Vec2 {
        self.origin + Vec2::new(0.5 * self.world_width(), 0.5 * self.world_height())
    }
}
