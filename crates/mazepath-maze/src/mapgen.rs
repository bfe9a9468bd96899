//! Random maze generation.
//!
//! Provides two generators:
//! - **Scatter**: every cell independently becomes a wall with a fixed
//!   probability.
//! - **Random Walk**: starts from solid rock and carves open floor with a
//!   4-directional drunk walk from the centre.

use mazepath_core::{Coord, Maze};
use mazepath_paths::Neighbors;
use rand::{Rng, RngExt};

/// Maze generator operating on a [`Maze`].
pub struct MazeGen<R: Rng> {
    pub rng: R,
    pub maze: Maze,
}

impl<R: Rng> MazeGen<R> {
    /// Create a new generator that will overwrite `maze`.
    pub fn with_maze(maze: Maze, rng: R) -> Self {
        Self { rng, maze }
    }

    /// Turn each cell into a wall with probability `wall_pct` (clamped to
    /// 0.0–1.0), otherwise open it.
    ///
    /// Returns the number of open cells.
    pub fn scatter(&mut self, wall_pct: f64) -> usize {
        let p = wall_pct.clamp(0.0, 1.0);
        for i in 0..self.maze.len() {
            let c = self.maze.coord(i);
            let wall = self.rng.random_bool(p);
            self.maze.set_blocked(c, wall);
        }
        self.maze.count_open()
    }

    /// Fill the maze with walls, then perform up to `walks` random walks
    /// from the centre, opening every visited cell, until `fill_pct`
    /// (0.0–1.0) of the area is open.
    ///
    /// Returns the number of cells carved.
    pub fn random_walk(&mut self, fill_pct: f64, walks: usize) -> usize {
        self.maze.fill(true);
        let total = self.maze.len();
        let target = ((total as f64 * fill_pct.clamp(0.0, 1.0)) as usize).max(1);
        let start = Coord::new(self.maze.rows() / 2, self.maze.cols() / 2);
        let mut nb = Neighbors::new();
        let mut carved = 0usize;

        for _ in 0..walks {
            let mut pos = start;
            let step_limit = total * 4; // per walk

            for _ in 0..step_limit {
                if self.maze.is_blocked(pos) {
                    self.maze.set_blocked(pos, false);
                    carved += 1;
                }
                if carved >= target {
                    return carved;
                }

                let maze = &self.maze;
                let options = nb.cardinal(pos, |c| maze.contains(c));
                if options.is_empty() {
                    break;
                }
                pos = options[self.rng.random_range(0..options.len())];
            }
        }

        carved
    }

    /// Force the given cells open, e.g. the endpoints of a search.
    pub fn keep_open(&mut self, coords: &[Coord]) {
        for &c in coords {
            self.maze.set_blocked(c, false);
        }
    }

    /// Finish generation and return the maze.
    pub fn into_maze(self) -> Maze {
        self.maze
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazepath_paths::{bfs_distance, find_path};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generator(rows: usize, cols: usize, seed: u64) -> MazeGen<StdRng> {
        MazeGen::with_maze(Maze::new(rows, cols).unwrap(), StdRng::seed_from_u64(seed))
    }

    #[test]
    fn scatter_extremes() {
        let mut mg = generator(10, 10, 1);
        assert_eq!(mg.scatter(0.0), 100);
        assert_eq!(mg.scatter(1.0), 0);
        assert_eq!(mg.scatter(-3.0), 100);
    }

    #[test]
    fn scatter_produces_mixed() {
        let mut mg = generator(30, 30, 7);
        let open = mg.scatter(0.4);
        assert!(open > 0);
        assert!(open < 900);
    }

    #[test]
    fn scatter_is_reproducible() {
        let mut a = generator(16, 16, 99);
        let mut b = generator(16, 16, 99);
        a.scatter(0.35);
        b.scatter(0.35);
        assert_eq!(a.into_maze(), b.into_maze());
    }

    #[test]
    fn random_walk_carves_connected_cells() {
        let mut mg = generator(20, 20, 3);
        let carved = mg.random_walk(0.4, 10);
        assert!(carved > 0);
        let maze = mg.into_maze();
        assert_eq!(maze.count_open(), carved);

        // Every carved cell is reachable from the centre.
        let centre = Coord::new(10, 10);
        for (c, blocked) in maze.iter() {
            if !blocked {
                assert!(find_path(&maze, centre, c).unwrap().is_some(), "{c} unreachable");
            }
        }
    }

    #[test]
    fn keep_open_forces_endpoints() {
        let mut mg = generator(5, 5, 0);
        mg.scatter(1.0);
        mg.keep_open(&[Coord::new(0, 0), Coord::new(4, 4)]);
        let maze = mg.into_maze();
        assert_eq!(maze.count_open(), 2);
        assert_eq!(bfs_distance(&maze, Coord::new(0, 0), Coord::new(4, 4)), Ok(None));
    }
}
