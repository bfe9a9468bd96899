//! Validated search entry points over a [`Maze`].

use mazepath_core::{Coord, Maze};

use crate::astar::astar_path;
use crate::bfs::bfs_map;
use crate::error::{Endpoint, PathError};

/// Find a shortest path from `start` to `goal` through the open cells of
/// `maze`, moving one orthogonal step at a time.
///
/// Returns `Ok(Some(path))` with both endpoints included (a single cell
/// when `start == goal`), or `Ok(None)` when no path exists. Out-of-bounds
/// or blocked endpoints are rejected before any search work.
pub fn find_path(maze: &Maze, start: Coord, goal: Coord) -> Result<Option<Vec<Coord>>, PathError> {
    check_endpoints(maze, start, goal)?;
    Ok(astar_path(maze, start, goal))
}

/// Number of steps on a shortest path from `start` to `goal`, computed by
/// breadth-first search. Endpoints are validated as in [`find_path`].
pub fn bfs_distance(maze: &Maze, start: Coord, goal: Coord) -> Result<Option<i32>, PathError> {
    check_endpoints(maze, start, goal)?;
    Ok(bfs_map(maze, &[start], i32::MAX).get(&goal).copied())
}

/// Whether `path` is a walk through open cells of `maze` where each
/// consecutive pair is one orthogonal step apart. An empty path is not
/// valid.
pub fn path_is_valid(maze: &Maze, path: &[Coord]) -> bool {
    !path.is_empty()
        && path.iter().all(|&c| maze.is_open(c))
        && path.windows(2).all(|w| w[0].is_adjacent(w[1]))
}

fn check_endpoints(maze: &Maze, start: Coord, goal: Coord) -> Result<(), PathError> {
    maze.check_bounds(start)?;
    maze.check_bounds(goal)?;
    if maze.is_blocked(start) {
        return Err(PathError::Blocked {
            endpoint: Endpoint::Start,
            at: start,
        });
    }
    if maze.is_blocked(goal) {
        return Err(PathError::Blocked {
            endpoint: Endpoint::Goal,
            at: goal,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mazepath_core::GridError;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }

    fn check_shape(maze: &Maze, path: &[Coord], start: Coord, goal: Coord) {
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&goal));
        assert!(path_is_valid(maze, path));
    }

    #[test]
    fn open_3x3_corner_to_corner() {
        let maze = Maze::new(3, 3).unwrap();
        let path = find_path(&maze, c(0, 0), c(2, 2)).unwrap().unwrap();
        assert_eq!(path.len(), 5);
        check_shape(&maze, &path, c(0, 0), c(2, 2));
    }

    #[test]
    fn routes_through_single_opening() {
        let maze = Maze::from_cells(&[vec![0, 0, 0], vec![1, 0, 1], vec![0, 0, 0]]).unwrap();
        let path = find_path(&maze, c(0, 0), c(2, 0)).unwrap().unwrap();
        assert!(path.contains(&c(1, 1)));
        assert_eq!(path.len(), 5);
        check_shape(&maze, &path, c(0, 0), c(2, 0));
    }

    #[test]
    fn no_diagonal_moves() {
        let maze = Maze::from_cells(&[vec![0, 1], vec![1, 0]]).unwrap();
        assert_eq!(find_path(&maze, c(0, 0), c(1, 1)), Ok(None));
    }

    #[test]
    fn start_equals_goal() {
        let maze = Maze::new(2, 2).unwrap();
        assert_eq!(find_path(&maze, c(1, 1), c(1, 1)), Ok(Some(vec![c(1, 1)])));
    }

    #[test]
    fn wall_separates_regions() {
        let maze = Maze::from_cells(&[
            vec![0, 0, 1, 0],
            vec![0, 0, 1, 0],
            vec![0, 0, 1, 0],
        ])
        .unwrap();
        assert_eq!(find_path(&maze, c(0, 0), c(2, 3)), Ok(None));
        assert_eq!(bfs_distance(&maze, c(0, 0), c(2, 3)), Ok(None));
    }

    #[test]
    fn out_of_bounds_rejected() {
        let maze = Maze::new(3, 3).unwrap();
        assert_eq!(
            find_path(&maze, c(0, 0), c(3, 0)),
            Err(PathError::Grid(GridError::OutOfBounds {
                at: c(3, 0),
                rows: 3,
                cols: 3
            }))
        );
        assert!(find_path(&maze, c(-1, 0), c(0, 0)).is_err());
    }

    #[test]
    fn blocked_endpoints_rejected() {
        let maze = Maze::from_cells(&[vec![1, 0], vec![0, 1]]).unwrap();
        assert_eq!(
            find_path(&maze, c(0, 0), c(0, 1)),
            Err(PathError::Blocked {
                endpoint: Endpoint::Start,
                at: c(0, 0)
            })
        );
        assert_eq!(
            find_path(&maze, c(0, 1), c(1, 1)),
            Err(PathError::Blocked {
                endpoint: Endpoint::Goal,
                at: c(1, 1)
            })
        );
        // Blocked start is rejected even when it is also the goal.
        assert!(find_path(&maze, c(0, 0), c(0, 0)).is_err());
    }

    #[test]
    fn error_display() {
        let err = PathError::Blocked {
            endpoint: Endpoint::Goal,
            at: c(2, 1),
        };
        assert_eq!(err.to_string(), "goal cell (2, 1) is blocked");
    }

    #[test]
    fn repeated_calls_are_identical() {
        let maze = Maze::from_cells(&[
            vec![0, 0, 0, 0],
            vec![0, 1, 1, 0],
            vec![0, 0, 0, 0],
        ])
        .unwrap();
        let first = find_path(&maze, c(0, 0), c(2, 3));
        for _ in 0..5 {
            assert_eq!(find_path(&maze, c(0, 0), c(2, 3)), first);
        }
    }

    #[test]
    fn path_validity_checks() {
        let maze = Maze::from_cells(&[vec![0, 0], vec![1, 0]]).unwrap();
        assert!(path_is_valid(&maze, &[c(0, 0), c(0, 1), c(1, 1)]));
        assert!(!path_is_valid(&maze, &[]));
        assert!(!path_is_valid(&maze, &[c(0, 0), c(1, 1)]));
        assert!(!path_is_valid(&maze, &[c(0, 0), c(1, 0)]));
    }

    #[test]
    fn astar_matches_bfs_on_random_mazes() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let rows = rng.random_range(1..=12usize);
            let cols = rng.random_range(1..=12usize);
            let cells: Vec<Vec<u8>> = (0..rows)
                .map(|_| (0..cols).map(|_| u8::from(rng.random_bool(0.3))).collect())
                .collect();
            let mut maze = Maze::from_cells(&cells).unwrap();
            let start = c(
                rng.random_range(0..rows as i32),
                rng.random_range(0..cols as i32),
            );
            let goal = c(
                rng.random_range(0..rows as i32),
                rng.random_range(0..cols as i32),
            );
            maze.set_blocked(start, false);
            maze.set_blocked(goal, false);

            let path = find_path(&maze, start, goal).unwrap();
            let expected = bfs_distance(&maze, start, goal).unwrap();
            match (path, expected) {
                (Some(p), Some(d)) => {
                    assert_eq!(p.len() as i32 - 1, d, "{start} -> {goal} in {maze:?}");
                    check_shape(&maze, &p, start, goal);
                }
                (None, None) => {}
                (p, d) => panic!("astar {p:?} disagrees with bfs {d:?} in {maze:?}"),
            }
        }
    }
}
