//! Cell-space rectangles used to restrict work to a region of interest.

use glam::IVec2;

/// Active window in cell indices. Both corners are inclusive:
/// [min.x, max.x] x [min.y, max.y].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellBounds {
    pub min: IVec2,
    pub max: IVec2,
}

impl CellBounds {
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self { min, max }
    }

    /// Bounds covering a whole `width` x `height` grid.
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            min: IVec2::ZERO,
            max: IVec2::new(width as i32 - 1, height as i32 - 1),
        }
    }

    #[inline]
    pub fn contains(&self, i: i32, j: i32) -> bool {
        i >= self.min.x && i <= self.max.x && j >= self.min.y && j <= self.max.y
    }

    /// Number of cells along x.
    #[inline]
    pub fn width(&self) -> u32 {
        (self.max.x - self.min.x + 1).max(0) as u32
    }

    /// Number of cells along y.
    #[inline]
    pub fn height(&self) -> u32 {
        (self.max.y - self.min.y + 1).max(0) as u32
    }

    /// Iterate all cells in the window, row by row.
    pub fn iter(self) -> impl Iterator<Item = IVec2> {
        let CellBounds { min, max } = self;
        (min.y..=max.y).flat_map(move |j| (min.x..=max.x).map(move |i| IVec2::new(i, j)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let bounds = CellBounds::new(IVec2::new(1, 2), IVec2::new(3, 4));
        assert!(bounds.contains(1, 2));
        assert!(bounds.contains(3, 4));
        assert!(!bounds.contains(0, 2));
        assert!(!bounds.contains(3, 5));
        assert_eq!(bounds.width(), 3);
        assert_eq!(bounds.height(), 3);
    }

    #[test]
    fn iter_visits_every_cell_once() {
        let bounds = CellBounds::new(IVec2::new(1, 1), IVec2::new(2, 3));
        let cells: Vec<_> = bounds.iter().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], IVec2::new(1, 1));
        assert_eq!(cells[1], IVec2::new(2, 1));
        assert_eq!(cells[5], IVec2::new(2, 3));
    }

    #[test]
    fn full_grid_bounds() {
        let bounds = CellBounds::full(10, 5);
        assert_eq!(bounds.min, IVec2::ZERO);
        assert_eq!(bounds.max, IVec2::new(9, 4));
    }
}
