use std::fmt;

use crate::{
    antennas::{AntennaSet, EMPTY},
    bounds::Bounds,
    error::{Error, Result},
    model::InterferencePoint,
};

/// Marker drawn on cells where interference occurs.
pub const INTERFERENCE: char = '#';

/// A `width x height` character buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    bounds: Bounds,
    cells: Vec<char>,
}

impl Grid {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            cells: vec![EMPTY; bounds.area()],
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (usize::try_from(x).ok()?, usize::try_from(y).ok()?);
        let width = self.bounds.width as usize;
        (x < width && y < self.bounds.height as usize).then_some(y * width + x)
    }

    pub fn get(&self, x: i32, y: i32) -> Option<char> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Writes each antenna's frequency at its position. Fails on the first
    /// antenna that lies outside the grid.
    pub fn place_antennas(&mut self, antennas: &AntennaSet) -> Result<()> {
        for antenna in antennas {
            let Some(i) = self.index(antenna.x(), antenna.y()) else {
                return Err(Error::OutOfBounds {
                    frequency: antenna.frequency,
                    x: antenna.x(),
                    y: antenna.y(),
                    width: self.bounds.width,
                    height: self.bounds.height,
                });
            };
            self.cells[i] = antenna.frequency;
        }
        Ok(())
    }

    /// Marks interference on empty cells only. Points outside the grid are skipped.
    pub fn mark_interference(&mut self, points: &[InterferencePoint]) {
        for p in points {
            if let Some(i) = self.index(p.x, p.y) {
                if self.cells[i] == EMPTY {
                    self.cells[i] = INTERFERENCE;
                }
            }
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bounds.width == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.bounds.width as usize) {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Draws antennas, then interference markers, and returns the grid as text.
pub fn render(
    antennas: &AntennaSet,
    points: &[InterferencePoint],
    bounds: Bounds,
) -> Result<String> {
    let mut grid = Grid::new(bounds);
    grid.place_antennas(antennas)?;
    grid.mark_interference(points);
    Ok(grid.to_string())
}
