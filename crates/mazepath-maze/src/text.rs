//! Mazes written as text.
//!
//! A [`MazeText`] parses an ASCII drawing into a [`Maze`] plus optional
//! start and goal markers:
//!
//! ```text
//! S..#
//! .#.#
//! ...G
//! ```
//!
//! `#` or `1` is a wall; `.`, `0` or a space is open floor; `S` and `G`
//! mark the start and goal (both open). Every line must have the same
//! width.

use std::fmt;
use std::str::FromStr;

use mazepath_core::{Coord, GridError, Maze};

use crate::render::render;

/// A parsed text maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MazeText {
    pub maze: Maze,
    pub start: Option<Coord>,
    pub goal: Option<Coord>,
}

impl MazeText {
    /// Parse a maze drawing.
    ///
    /// Blank lines before and after the drawing are ignored; `\r\n` line
    /// endings are accepted.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let s = s.trim_matches(|ch| ch == '\n' || ch == '\r');
        if s.is_empty() {
            return Err(ParseError::Empty);
        }

        let mut rows: Vec<Vec<bool>> = Vec::new();
        let mut start = None;
        let mut goal = None;
        let mut width = None;

        for (r, line) in s.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            let mut row = Vec::with_capacity(line.len());
            for (c, ch) in line.chars().enumerate() {
                let at = Coord::new(r as i32, c as i32);
                let blocked = match ch {
                    '#' | '1' => true,
                    '.' | '0' | ' ' => false,
                    'S' => {
                        set_marker(&mut start, ch, at)?;
                        false
                    }
                    'G' => {
                        set_marker(&mut goal, ch, at)?;
                        false
                    }
                    _ => return Err(ParseError::InvalidChar { ch, at }),
                };
                row.push(blocked);
            }
            match width {
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(ParseError::InconsistentWidth {
                        line: r,
                        expected: w,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }
            rows.push(row);
        }

        let maze = Maze::from_rows(rows)?;
        Ok(Self { maze, start, goal })
    }
}

fn set_marker(slot: &mut Option<Coord>, ch: char, at: Coord) -> Result<(), ParseError> {
    if slot.is_some() {
        return Err(ParseError::DuplicateMarker { ch, at });
    }
    *slot = Some(at);
    Ok(())
}

impl FromStr for MazeText {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MazeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(&self.maze, None, self.start, self.goal))
    }
}

/// Errors that can occur when parsing a text maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No lines at all.
    Empty,
    /// A line's width differs from the first line's.
    InconsistentWidth {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// A character outside the maze alphabet was found.
    InvalidChar { ch: char, at: Coord },
    /// `S` or `G` appears more than once.
    DuplicateMarker { ch: char, at: Coord },
    /// The drawing does not form a valid grid.
    Grid(GridError),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "maze text is empty"),
            Self::InconsistentWidth {
                line,
                expected,
                found,
            } => write!(
                f,
                "maze line {} is {found} cells wide, expected {expected}",
                line + 1
            ),
            Self::InvalidChar { ch, at } => {
                write!(f, "maze contains invalid character '{ch}' at {at}")
            }
            Self::DuplicateMarker { ch, at } => {
                write!(f, "maze marker '{ch}' repeated at {at}")
            }
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ParseError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}
