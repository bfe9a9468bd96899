//! One solver run: load a maze, search it, print the result.

use std::fmt;
use std::io::{self, Read, Write};

use mazepath_core::{Coord, Maze};
use mazepath_maze::{MazeGen, MazeText, ParseError, render};
use mazepath_paths::{PathError, bfs_distance, find_path};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::config::{Config, Format, Source};

/// How a successful run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Found,
    NoPath,
}

/// The maze and endpoints a search ran on, and what it found.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub maze: Maze,
    pub start: Coord,
    pub goal: Coord,
    pub path: Option<Vec<Coord>>,
}

impl Outcome {
    pub fn status(&self) -> Status {
        if self.path.is_some() {
            Status::Found
        } else {
            Status::NoPath
        }
    }

    /// Number of steps (edges) on the path.
    pub fn steps(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len() - 1)
    }
}

#[derive(Serialize)]
struct Report<'a> {
    start: Coord,
    goal: Coord,
    path: Option<&'a [Coord]>,
    length: Option<usize>,
}

/// Anything that stops a run from producing an answer.
#[derive(Debug)]
pub enum RunError {
    Io(io::Error),
    Parse(ParseError),
    Path(PathError),
    Json(serde_json::Error),
    /// A* and BFS disagree on the shortest distance.
    Verify {
        astar: Option<usize>,
        bfs: Option<usize>,
    },
}

impl RunError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Verify { .. } => 3,
            _ => 2,
        }
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "i/o error: {e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Path(e) => write!(f, "{e}"),
            Self::Json(e) => write!(f, "json output failed: {e}"),
            Self::Verify { astar, bfs } => write!(
                f,
                "verification failed: A* found {astar:?} steps, breadth-first search {bfs:?}"
            ),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            Self::Path(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Verify { .. } => None,
        }
    }
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseError> for RunError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<PathError> for RunError {
    fn from(e: PathError) -> Self {
        Self::Path(e)
    }
}

impl From<serde_json::Error> for RunError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Number of random walks used by `--carve`.
const CARVE_WALKS: usize = 32;

fn far_corner(maze: &Maze) -> Coord {
    Coord::new(maze.rows() - 1, maze.cols() - 1)
}

/// Build the maze and endpoints described by `config`. `stdin` is only
/// read for [`Source::Stdin`].
pub fn load(config: &Config, mut stdin: impl Read) -> Result<(Maze, Coord, Coord), RunError> {
    let text = match &config.source {
        Source::File(path) => {
            log::info!("reading maze from {}", path.display());
            MazeText::parse(&std::fs::read_to_string(path)?)?
        }
        Source::Stdin => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            MazeText::parse(&buf)?
        }
        Source::Random { rows, cols } => {
            let maze = Maze::new(*rows, *cols).map_err(ParseError::from)?;
            let start = config.start.unwrap_or(Coord::ZERO);
            let goal = config.goal.unwrap_or(far_corner(&maze));
            let mut mg = MazeGen::with_maze(maze, StdRng::seed_from_u64(config.seed));
            match config.carve {
                Some(fill) => {
                    log::info!("carving {rows}x{cols} maze, open={fill} seed={}", config.seed);
                    mg.random_walk(fill, CARVE_WALKS);
                }
                None => {
                    log::info!(
                        "generating {rows}x{cols} maze, walls={} seed={}",
                        config.walls,
                        config.seed
                    );
                    mg.scatter(config.walls);
                }
            }
            mg.keep_open(&[start, goal]);
            MazeText {
                maze: mg.into_maze(),
                start: Some(start),
                goal: Some(goal),
            }
        }
    };

    let MazeText { maze, start, goal } = text;
    let start = config.start.or(start).unwrap_or(Coord::ZERO);
    let goal = config.goal.or(goal).unwrap_or(far_corner(&maze));

    log::info!(
        "maze {}x{} ({} open), start {start}, goal {goal}",
        maze.rows(),
        maze.cols(),
        maze.count_open()
    );
    Ok((maze, start, goal))
}

/// Search the loaded maze, optionally cross-checking with BFS.
pub fn solve(config: &Config, maze: Maze, start: Coord, goal: Coord) -> Result<Outcome, RunError> {
    let path = find_path(&maze, start, goal)?;
    let outcome = Outcome {
        maze,
        start,
        goal,
        path,
    };

    if config.verify {
        let bfs = bfs_distance(&outcome.maze, start, goal)?.map(|d| d as usize);
        if bfs != outcome.steps() {
            return Err(RunError::Verify {
                astar: outcome.steps(),
                bfs,
            });
        }
        log::info!("verified against breadth-first search");
    }
    Ok(outcome)
}

/// Print `outcome` in the configured format.
pub fn report(config: &Config, outcome: &Outcome, out: &mut impl Write) -> Result<(), RunError> {
    match config.format {
        Format::Json => {
            let report = Report {
                start: outcome.start,
                goal: outcome.goal,
                path: outcome.path.as_deref(),
                length: outcome.steps(),
            };
            serde_json::to_writer(&mut *out, &report)?;
            writeln!(out)?;
        }
        Format::Text => {
            match &outcome.path {
                Some(path) => {
                    let cells: Vec<String> = path.iter().map(Coord::to_string).collect();
                    writeln!(out, "Shortest path ({} steps): {}", path.len() - 1, cells.join(" -> "))?;
                }
                None => writeln!(out, "No path found.")?,
            }
            write!(
                out,
                "{}",
                render(
                    &outcome.maze,
                    outcome.path.as_deref(),
                    Some(outcome.start),
                    Some(outcome.goal)
                )
            )?;
        }
    }
    Ok(())
}

/// Load, solve and report.
pub fn run(config: &Config, stdin: impl Read, out: &mut impl Write) -> Result<Status, RunError> {
    let (maze, start, goal) = load(config, stdin)?;
    let outcome = solve(config, maze, start, goal)?;
    report(config, &outcome, out)?;
    Ok(outcome.status())
}
