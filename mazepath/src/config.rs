//! Command-line configuration.
//!
//! Arguments are matched by hand over `std::env::args()`; there are few
//! enough of them that a parser crate would not pay its way.

use std::fmt;
use std::path::PathBuf;

use mazepath_core::Coord;

pub const USAGE: &str = "\
Usage: mazepath [OPTIONS] [MAZE_FILE]

Find the shortest 4-directional path through a text maze.
MAZE_FILE uses '#' or '1' for walls, '.', '0' or ' ' for floor, and may mark
the start with 'S' and the goal with 'G'. Use '-' (or omit it) to read stdin.

Options:
  --random <ROWSxCOLS>   Generate a random maze instead of reading one
  --walls <PCT>          Wall probability for --random, 0.0-1.0 (default: 0.3)
  --carve <PCT>          Carve the --random maze with random walks until PCT
                         of the cells are open (replaces --walls)
  --seed <N>             Seed for --random (default: 0)
  --start <ROW,COL>      Start cell (default: 'S' marker, else top-left)
  --goal <ROW,COL>       Goal cell (default: 'G' marker, else bottom-right)
  --format <text|json>   Output format (default: text)
  --verify               Cross-check the path length with breadth-first search
  -v                     Increase log verbosity (repeatable); MAZEPATH_LOG overrides
  --help, -h             Show this help

Exit status: 0 path found, 1 no path, 2 invalid input, 3 verification failed.
";

/// Where the maze comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    File(PathBuf),
    Stdin,
    Random { rows: usize, cols: usize },
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// Options for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub source: Source,
    /// Wall probability for generated mazes.
    pub walls: f64,
    /// Open fraction for random-walk carving; `None` scatters walls instead.
    pub carve: Option<f64>,
    pub seed: u64,
    pub start: Option<Coord>,
    pub goal: Option<Coord>,
    pub format: Format,
    pub verify: bool,
    pub verbosity: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: Source::Stdin,
            walls: 0.3,
            carve: None,
            seed: 0,
            start: None,
            goal: None,
            format: Format::Text,
            verify: false,
            verbosity: 0,
        }
    }
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(Config),
    Help,
}

/// A malformed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingValue(&'static str),
    InvalidValue { flag: &'static str, value: String },
    UnknownArgument(String),
    ConflictingSource,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingValue(flag) => write!(f, "{flag} requires a value"),
            Self::InvalidValue { flag, value } => write!(f, "invalid value for {flag}: {value}"),
            Self::UnknownArgument(arg) => write!(f, "unknown argument: {arg}"),
            Self::ConflictingSource => {
                write!(f, "give at most one maze file, or --random without a file")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse command-line arguments (without the program name).
pub fn parse_args<I>(args: I) -> Result<Command, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::default();
    let mut file: Option<Source> = None;
    let mut random: Option<Source> = None;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--random" => {
                let v = value(&mut args, "--random")?;
                let (rows, cols) = parse_size(&v).ok_or(ConfigError::InvalidValue {
                    flag: "--random",
                    value: v,
                })?;
                random = Some(Source::Random { rows, cols });
            }
            "--walls" => {
                let v = value(&mut args, "--walls")?;
                config.walls = parse_fraction(&v).ok_or(ConfigError::InvalidValue {
                    flag: "--walls",
                    value: v,
                })?;
            }
            "--carve" => {
                let v = value(&mut args, "--carve")?;
                config.carve = Some(parse_fraction(&v).ok_or(ConfigError::InvalidValue {
                    flag: "--carve",
                    value: v,
                })?);
            }
            "--seed" => {
                let v = value(&mut args, "--seed")?;
                config.seed = v.parse().map_err(|_| ConfigError::InvalidValue {
                    flag: "--seed",
                    value: v,
                })?;
            }
            "--start" => {
                let v = value(&mut args, "--start")?;
                config.start = Some(parse_coord(&v).ok_or(ConfigError::InvalidValue {
                    flag: "--start",
                    value: v,
                })?);
            }
            "--goal" => {
                let v = value(&mut args, "--goal")?;
                config.goal = Some(parse_coord(&v).ok_or(ConfigError::InvalidValue {
                    flag: "--goal",
                    value: v,
                })?);
            }
            "--format" => {
                let v = value(&mut args, "--format")?;
                config.format = match v.as_str() {
                    "text" => Format::Text,
                    "json" => Format::Json,
                    _ => {
                        return Err(ConfigError::InvalidValue {
                            flag: "--format",
                            value: v,
                        });
                    }
                };
            }
            "--verify" => config.verify = true,
            "--help" | "-h" => return Ok(Command::Help),
            "-" => {
                if file.replace(Source::Stdin).is_some() {
                    return Err(ConfigError::ConflictingSource);
                }
            }
            flag if flag.starts_with("-v") && flag[1..].chars().all(|c| c == 'v') => {
                config.verbosity = config.verbosity.saturating_add((flag.len() - 1) as u8);
            }
            other if other.starts_with('-') => {
                return Err(ConfigError::UnknownArgument(other.to_string()));
            }
            path => {
                if file.replace(Source::File(PathBuf::from(path))).is_some() {
                    return Err(ConfigError::ConflictingSource);
                }
            }
        }
    }

    config.source = match (file, random) {
        (Some(_), Some(_)) => return Err(ConfigError::ConflictingSource),
        (Some(src), None) | (None, Some(src)) => src,
        (None, None) => Source::Stdin,
    };
    Ok(Command::Run(config))
}

fn value(args: &mut impl Iterator<Item = String>, flag: &'static str) -> Result<String, ConfigError> {
    args.next().ok_or(ConfigError::MissingValue(flag))
}

/// Parse a fraction in `0.0..=1.0`.
fn parse_fraction(s: &str) -> Option<f64> {
    s.parse().ok().filter(|p: &f64| (0.0..=1.0).contains(p))
}

/// Parse `ROW,COL`.
pub fn parse_coord(s: &str) -> Option<Coord> {
    let (row, col) = s.split_once(',')?;
    Some(Coord::new(row.trim().parse().ok()?, col.trim().parse().ok()?))
}

/// Parse `ROWSxCOLS`; both must be at least 1.
pub fn parse_size(s: &str) -> Option<(usize, usize)> {
    let (rows, cols) = s.split_once(['x', 'X'])?;
    let rows: usize = rows.trim().parse().ok()?;
    let cols: usize = cols.trim().parse().ok()?;
    (rows > 0 && cols > 0).then_some((rows, cols))
}
