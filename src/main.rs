use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{bail, Context, Result};
use antennamap::{grid, interference, AntennaSet, Bounds};
use clap::{Parser, Subcommand};
use log::{info, warn};

mod config;
mod demo;
mod report;

use report::Format;

#[derive(Debug, Parser)]
struct Cli {
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid file to load, overriding the config
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Insert an antenna after loading, as FREQUENCY,X,Y
    #[arg(long, value_name = "F,X,Y", allow_hyphen_values = true)]
    add: Vec<AddArg>,

    /// Remove the antenna at X,Y after loading
    #[arg(long, value_name = "X,Y", allow_hyphen_values = true)]
    remove: Vec<RemoveArg>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the grid
    Grid {
        /// Mark interference points with '#'
        #[arg(long)]
        interference: bool,
    },
    /// List the antennas
    Antennas {
        #[arg(short, long, value_enum, default_value_t)]
        format: Format,
    },
    /// List the interference points
    Interference {
        #[arg(short, long, value_enum, default_value_t)]
        format: Format,
        /// Collapse points reached by several antenna pairs
        #[arg(long)]
        unique: bool,
    },
    /// Run the demonstration sequence
    Demo,
}

#[derive(Debug, Clone)]
struct AddArg {
    frequency: char,
    x: i32,
    y: i32,
}

impl FromStr for AddArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let frequency = chars.next().context("expected FREQUENCY,X,Y")?;
        let Some(rest) = chars.as_str().strip_prefix(',') else {
            bail!("frequency must be a single character followed by ','");
        };
        let RemoveArg { x, y } = rest.parse()?;
        Ok(Self { frequency, x, y })
    }
}

#[derive(Debug, Clone)]
struct RemoveArg {
    x: i32,
    y: i32,
}

impl FromStr for RemoveArg {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (x, y) = s.split_once(',').context("expected X,Y")?;
        Ok(Self {
            x: x.trim().parse()?,
            y: y.trim().parse()?,
        })
    }
}

/// Loads the input grid. An unreadable file is not fatal: the run continues
/// with no antennas.
fn load_or_empty(path: &Path) -> (AntennaSet, Bounds) {
    match AntennaSet::load(path) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("{e}, continuing without antennas");
            (AntennaSet::new(), Bounds::default())
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = config::resolve(cli.config.as_deref())?;
    if let Some(input) = cli.input {
        config.input = input;
    }

    let (mut antennas, extent) = load_or_empty(&config.input);
    let bounds = config.bounds(extent);
    info!(
        "{} antennas on a {}x{} grid",
        antennas.len(),
        bounds.width,
        bounds.height
    );

    for a in &cli.add {
        antennas.insert(a.frequency, a.x, a.y)?;
    }
    for r in &cli.remove {
        antennas.remove(r.x, r.y);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::Grid { interference: marked } => {
            let points = if marked {
                interference::deduce(&antennas, bounds)?
            } else {
                Vec::new()
            };
            let text = grid::render(&antennas, &points, bounds)?;
            write!(out, "{text}")?;
        }
        Command::Antennas { format } => report::antennas(&mut out, &antennas, format)?,
        Command::Interference { format, unique } => {
            let mut points = interference::deduce(&antennas, bounds)?;
            if unique {
                points = interference::unique(&points);
            }
            report::interference(&mut out, &points, format)?;
        }
        Command::Demo => demo::run(&mut out, &mut antennas, bounds, &config.demo.insert)?,
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn add_arg() {
        let a: AddArg = "B,3,4".parse().unwrap();
        assert_eq!((a.frequency, a.x, a.y), ('B', 3, 4));
        let a: AddArg = ",,1,2".parse().unwrap();
        assert_eq!((a.frequency, a.x, a.y), (',', 1, 2));

        assert!("BB,3,4".parse::<AddArg>().is_err());
        assert!(",3,4".parse::<AddArg>().is_err());
        assert!("B,3".parse::<AddArg>().is_err());
    }

    #[test]
    fn remove_arg() {
        let r: RemoveArg = "-1, 7".parse().unwrap();
        assert_eq!((r.x, r.y), (-1, 7));
        assert!("1".parse::<RemoveArg>().is_err());
        assert!("a,b".parse::<RemoveArg>().is_err());
    }

    #[test]
    fn unreadable_input_gives_empty_set() {
        let (antennas, extent) = load_or_empty(Path::new("does/not/exist.txt"));
        assert!(antennas.is_empty());
        assert_eq!(extent, Bounds::default());
    }

    #[test]
    fn sample_input() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("estrutura.txt");
        let (antennas, extent) = load_or_empty(&path);
        assert_eq!(antennas.len(), 7);
        assert_eq!(extent, Bounds::new(12, 12));
    }

    #[test]
    fn cli() {
        Cli::command().debug_assert();
    }
}
