use crate::config::{CELL_COUNT, GRID_SIZE};
use backend::math::Rect;

/// 3x3 tiling of the play area, derived from the current window size.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn cell_rect(&self, cell: usize) -> Rect {
        debug_assert!(cell < CELL_COUNT);
        let col = cell as u32 % GRID_SIZE;
        let row = cell as u32 / GRID_SIZE;
        let x0 = self.edge(self.width, col);
        let x1 = self.edge(self.width, col + 1);
        let y0 = self.edge(self.height, row);
        let y1 = self.edge(self.height, row + 1);
        Rect::new(x0 as i32, y0 as i32, x1 - x0, y1 - y0)
    }

    pub fn cells(&self) -> impl Iterator<Item = (usize, Rect)> + '_ {
        (0..CELL_COUNT).map(move |i| (i, self.cell_rect(i)))
    }

    /// Cell under the pointer, row-major, or `None` outside the play area.
    pub fn cell_at(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u64, y as u64);
        if x >= u64::from(self.width) || y >= u64::from(self.height) {
            return None;
        }
        let col = Self::band(x, self.width);
        let row = Self::band(y, self.height);
        Some((row * u64::from(GRID_SIZE) + col) as usize)
    }

    // Largest k with edge(extent, k) <= pos, matching the floored edges of cell_rect.
    fn band(pos: u64, extent: u32) -> u64 {
        let g = u64::from(GRID_SIZE);
        (pos * g + g - 1) / u64::from(extent)
    }

    fn edge(&self, extent: u32, k: u32) -> u32 {
        (u64::from(extent) * u64::from(k) / u64::from(GRID_SIZE)) as u32
    }
}
