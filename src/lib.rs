//! Antennas on a 2-D grid and the interference they cause.
//!
//! Build an [`AntennaSet`], pass it to [`interference::deduce`] with the grid
//! [`Bounds`], then draw both with [`grid::render`].

pub mod antennas;
pub mod bounds;
pub mod error;
pub mod grid;
pub mod interference;
pub mod model;

pub use antennas::AntennaSet;
pub use bounds::Bounds;
pub use error::{Error, Result};
pub use model::{Antenna, InterferencePoint};
