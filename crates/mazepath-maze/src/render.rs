//! Text rendering of a maze and a found path.

use std::collections::HashSet;

use mazepath_core::{Coord, Maze};

pub const WALL: char = '#';
pub const FLOOR: char = '.';
pub const PATH: char = '*';
pub const START: char = 'S';
pub const GOAL: char = 'G';

/// Draw `maze` one line per row, newline-terminated.
///
/// Walls take precedence over everything else, then the endpoints, then
/// path cells. Endpoints outside the maze are ignored.
pub fn render(
    maze: &Maze,
    path: Option<&[Coord]>,
    start: Option<Coord>,
    goal: Option<Coord>,
) -> String {
    let on_path: HashSet<Coord> = path.unwrap_or_default().iter().copied().collect();
    let mut out = String::with_capacity(maze.len() + maze.rows() as usize);

    for (c, blocked) in maze.iter() {
        let ch = if blocked {
            WALL
        } else if Some(c) == start {
            START
        } else if Some(c) == goal {
            GOAL
        } else if on_path.contains(&c) {
            PATH
        } else {
            FLOOR
        };
        out.push(ch);
        if c.col == maze.cols() - 1 {
            out.push('\n');
        }
    }
    out
}
