use geo::Coord;

/// Extent of a grid. Valid positions are `[0, width) x [0, height)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, p: Coord<i32>) -> bool {
        // i64 so that a u32 extent above i32::MAX still compares correctly
        p.x >= 0
            && p.y >= 0
            && i64::from(p.x) < i64::from(self.width)
            && i64::from(p.y) < i64::from(self.height)
    }

    /// Grows the bounds so that the cell at `(x, y)` is covered. Returns whether
    /// the bounds changed. Negative coordinates never expand the grid.
    pub fn add(&mut self, x: i32, y: i32) -> bool {
        let mut expanded = false;
        if let Ok(x) = u32::try_from(x) {
            if x >= self.width {
                self.width = x + 1;
                expanded = true;
            }
        }
        if let Ok(y) = u32::try_from(y) {
            if y >= self.height {
                self.height = y + 1;
                expanded = true;
            }
        }
        expanded
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
