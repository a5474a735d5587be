use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Storage for a new record could not be reserved
    #[error("Failed to allocate memory for {what}")]
    Allocation { what: &'static str },

    /// An antenna lies outside the grid it is being drawn on
    #[error("Antenna {frequency} at ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        frequency: char,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
    },

    #[error("Failed to read antenna grid")]
    Read(#[from] io::Error),

    #[error("Failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
