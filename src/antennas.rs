//! The antenna collection and its text ingestion.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    iter::Rev,
    path::Path,
    slice,
};

use log::{debug, warn};

use crate::{
    bounds::Bounds,
    error::{Error, Result},
    model::Antenna,
};

/// Character that marks an empty cell in the input grid.
pub const EMPTY: char = '.';

/// An owned, unordered collection of antennas.
///
/// Iteration yields the most recently inserted antenna first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AntennaSet {
    // stored oldest first, iterated in reverse
    antennas: Vec<Antenna>,
}

pub type Iter<'a> = Rev<slice::Iter<'a, Antenna>>;

impl AntennaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an antenna. On allocation failure the set is left untouched.
    pub fn insert(&mut self, frequency: char, x: i32, y: i32) -> Result<()> {
        if self.antennas.try_reserve(1).is_err() {
            warn!("Failed to allocate memory for antenna {frequency} at ({x}, {y})");
            return Err(Error::Allocation { what: "antenna" });
        }
        self.antennas.push(Antenna::new(frequency, x, y));
        Ok(())
    }

    /// Removes the first antenna, in iteration order, located at `(x, y)`.
    pub fn remove(&mut self, x: i32, y: i32) -> Option<Antenna> {
        match self.antennas.iter().rposition(|a| a.is_at(x, y)) {
            Some(i) => Some(self.antennas.remove(i)),
            None => {
                debug!("No antenna at ({x}, {y}) to remove");
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.antennas.clear();
    }

    pub fn iter(&self) -> Iter<'_> {
        self.antennas.iter().rev()
    }

    pub fn len(&self) -> usize {
        self.antennas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.antennas.is_empty()
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.antennas.iter().any(|a| a.is_at(x, y))
    }

    /// Builds a set from the rows of a text grid. Every character other than
    /// [`EMPTY`] becomes an antenna at (column, row).
    ///
    /// Also returns the extent of the rows: the longest line by the number of lines.
    pub fn from_lines<I, S>(lines: I) -> Result<(Self, Bounds)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        let mut extent = Bounds::default();
        let mut rows = 0;

        for (y, line) in lines.into_iter().enumerate() {
            let line = line.as_ref().trim_end_matches(&['\r', '\n'][..]);
            for (x, frequency) in line.chars().enumerate() {
                extent.add(x as i32, y as i32);
                if frequency != EMPTY {
                    set.insert(frequency, x as i32, y as i32)?;
                }
            }
            rows = y as u32 + 1;
        }
        extent.height = rows;

        debug!(
            "Loaded {} antennas from a {}x{} grid",
            set.len(),
            extent.width,
            extent.height
        );
        Ok((set, extent))
    }

    pub fn from_reader<R: BufRead>(reader: R) -> Result<(Self, Bounds)> {
        let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
        Self::from_lines(lines)
    }

    pub fn load(path: &Path) -> Result<(Self, Bounds)> {
        let io_error = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_error)?;
        match Self::from_reader(BufReader::new(file)) {
            Err(Error::Read(source)) => Err(io_error(source)),
            other => other,
        }
    }
}

impl<'a> IntoIterator for &'a AntennaSet {
    type Item = &'a Antenna;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
