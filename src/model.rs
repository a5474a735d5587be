use geo::{coord, Coord};

/// An antenna on the grid, tagged with an opaque frequency symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Antenna {
    pub frequency: char,
    pub position: Coord<i32>,
}

impl Antenna {
    pub fn new(frequency: char, x: i32, y: i32) -> Self {
        Self {
            frequency,
            position: coord! { x: x, y: y },
        }
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn is_at(&self, x: i32, y: i32) -> bool {
        self.position.x == x && self.position.y == y
    }
}

/// A cell where two same-frequency antennas interfere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InterferencePoint {
    pub x: i32,
    pub y: i32,
}

impl InterferencePoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<Coord<i32>> for InterferencePoint {
    fn from(value: Coord<i32>) -> Self {
        Self::new(value.x, value.y)
    }
}
