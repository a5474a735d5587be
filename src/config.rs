use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use antennamap::Bounds;
use serde::Deserialize;

pub const DEFAULT_PATH: &str = "config.toml";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: PathBuf,

    // when unset, taken from the extent of the input file
    pub width: Option<u32>,
    pub height: Option<u32>,

    pub demo: DemoConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Antennas inserted and later removed again by the demo
    pub insert: Vec<DemoAntenna>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct DemoAntenna {
    pub frequency: char,
    pub x: i32,
    pub y: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("estrutura.txt"),
            width: None,
            height: None,
            demo: DemoConfig::default(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            insert: vec![
                DemoAntenna {
                    frequency: 'B',
                    x: 3,
                    y: 3,
                },
                DemoAntenna {
                    frequency: 'B',
                    x: 5,
                    y: 5,
                },
            ],
        }
    }
}

impl Config {
    /// Grid size to work with, falling back to the extent of the input.
    pub fn bounds(&self, extent: Bounds) -> Bounds {
        Bounds::new(
            self.width.unwrap_or(extent.width),
            self.height.unwrap_or(extent.height),
        )
    }
}

pub fn load(path: &Path) -> Result<Config> {
    let data = fs::read_to_string(path).context("Failed to read config")?;
    parse(&data)
}

fn parse(data: &str) -> Result<Config> {
    let config = toml::from_str(data).context("Failed to parse config")?;
    Ok(config)
}

/// Loads the config named on the command line. Without one, `config.toml` is
/// used if present and defaults otherwise.
pub fn resolve(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => load(path),
        None => {
            let path = Path::new(DEFAULT_PATH);
            if path.exists() {
                load(path)
            } else {
                log::debug!("No {DEFAULT_PATH} found, using defaults");
                Ok(Config::default())
            }
        }
    }
}
