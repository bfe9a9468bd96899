use std::collections::HashMap;

use mazepath_core::Coord;

use crate::frontier::Frontier;
use crate::traits::AstarPather;

/// Counters collected during one A* search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Coordinates taken off the frontier and expanded.
    pub expanded: usize,
    /// Frontier insertions, the start included.
    pub pushed: usize,
    /// Frontier entries discarded because a cheaper entry for the same
    /// coordinate had already been handled.
    pub stale: usize,
}

/// Per-coordinate search record: best known cost and the predecessor it
/// was reached from.
#[derive(Debug, Clone, Copy)]
struct Node {
    g: i32,
    f: i32,
    parent: Option<Coord>,
    open: bool,
}

/// Compute the shortest path from `start` to `goal` using A*.
///
/// Returns the full path (including both endpoints) or `None` if `goal` is
/// unreachable. Only the pather decides which coordinates exist, so callers
/// wanting bounds or endpoint validation should go through
/// [`find_path`](crate::find_path).
pub fn astar_path<P: AstarPather>(pather: &P, start: Coord, goal: Coord) -> Option<Vec<Coord>> {
    astar_with_stats(pather, start, goal).0
}

/// Same as [`astar_path`], also returning the search counters.
pub fn astar_with_stats<P: AstarPather>(
    pather: &P,
    start: Coord,
    goal: Coord,
) -> (Option<Vec<Coord>>, SearchStats) {
    let mut stats = SearchStats::default();

    if start == goal {
        return (Some(vec![start]), stats);
    }

    // Cost and predecessor maps, fresh for every call.
    let mut nodes: HashMap<Coord, Node> = HashMap::new();
    let start_f = pather.estimate(start, goal);
    nodes.insert(
        start,
        Node {
            g: 0,
            f: start_f,
            parent: None,
            open: true,
        },
    );

    let mut open = Frontier::new();
    open.push(start, start_f);
    stats.pushed += 1;

    let mut nbuf = Vec::with_capacity(4);

    let found = 'search: loop {
        let Some((current, f)) = open.pop() else {
            break 'search false;
        };

        let Some(node) = nodes.get_mut(&current) else {
            continue;
        };

        // Skip stale entries.
        if !node.open || node.f != f {
            stats.stale += 1;
            continue;
        }

        if current == goal {
            break 'search true;
        }

        node.open = false;
        let current_g = node.g;
        stats.expanded += 1;
        log::trace!("astar: expand {current} g={current_g} f={f}");

        nbuf.clear();
        pather.neighbors(current, &mut nbuf);

        for &next in nbuf.iter() {
            let tentative_g = current_g + pather.cost(current, next);

            if let Some(n) = nodes.get(&next) {
                if tentative_g >= n.g {
                    continue;
                }
            }

            let next_f = tentative_g + pather.estimate(next, goal);
            nodes.insert(
                next,
                Node {
                    g: tentative_g,
                    f: next_f,
                    parent: Some(current),
                    open: true,
                },
            );
            open.push(next, next_f);
            stats.pushed += 1;
        }
    };

    log::debug!(
        "astar {start} -> {goal}: found={found} expanded={} pushed={} stale={}",
        stats.expanded,
        stats.pushed,
        stats.stale
    );

    if !found {
        return (None, stats);
    }

    // Reconstruct path.
    let mut path = vec![goal];
    let mut cur = goal;
    while let Some(parent) = nodes.get(&cur).and_then(|n| n.parent) {
        path.push(parent);
        cur = parent;
    }
    path.reverse();
    (Some(path), stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{Pather, WeightedPather};
    use mazepath_core::Maze;

    /// Unbounded open plane: every coordinate is walkable.
    struct Plane;

    impl Pather for Plane {
        fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
            buf.extend(c.neighbors_4());
        }
    }

    impl WeightedPather for Plane {
        fn cost(&self, _from: Coord, _to: Coord) -> i32 {
            1
        }
    }

    impl AstarPather for Plane {
        fn estimate(&self, from: Coord, to: Coord) -> i32 {
            crate::manhattan(from, to)
        }
    }

    fn assert_steps(path: &[Coord]) {
        for w in path.windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {} is not one step", w[0], w[1]);
        }
    }

    #[test]
    fn start_equals_goal() {
        let c = Coord::new(4, 4);
        assert_eq!(astar_path(&Plane, c, c), Some(vec![c]));
    }

    #[test]
    fn straight_line_on_plane() {
        let path = astar_path(&Plane, Coord::new(0, 0), Coord::new(0, 5)).unwrap();
        assert_eq!(path.len(), 6);
        assert_eq!(path[0], Coord::new(0, 0));
        assert_eq!(path[5], Coord::new(0, 5));
        assert_steps(&path);
    }

    #[test]
    fn negative_coordinates_on_plane() {
        let path = astar_path(&Plane, Coord::new(0, 0), Coord::new(-3, -2)).unwrap();
        assert_eq!(path.len(), 6);
        assert_steps(&path);
    }

    #[test]
    fn detour_around_wall() {
        // .....
        // .###.
        // .....
        let maze = Maze::from_cells(&[
            vec![0, 0, 0, 0, 0],
            vec![0, 1, 1, 1, 0],
            vec![0, 0, 0, 0, 0],
        ])
        .unwrap();
        let path = astar_path(&maze, Coord::new(1, 0), Coord::new(1, 4)).unwrap();
        assert_eq!(path.len(), 7);
        assert_steps(&path);
        assert!(path.iter().all(|&c| maze.is_open(c)));
    }

    #[test]
    fn unreachable_goal() {
        let maze = Maze::from_cells(&[vec![0, 1, 0]]).unwrap();
        let (path, stats) = astar_with_stats(&maze, Coord::new(0, 0), Coord::new(0, 2));
        assert_eq!(path, None);
        assert_eq!(stats.expanded, 1);
    }

    #[test]
    fn stats_count_work() {
        let maze = Maze::new(1, 4).unwrap();
        let (path, stats) = astar_with_stats(&maze, Coord::new(0, 0), Coord::new(0, 3));
        assert_eq!(path.map(|p| p.len()), Some(4));
        // Straight corridor: each cell but the goal is expanded once.
        assert_eq!(stats.expanded, 3);
        assert_eq!(stats.pushed, 4);
        assert_eq!(stats.stale, 0);
    }

    #[test]
    fn improved_cost_leaves_stale_entries() {
        // .....
        // G##..
        // .#...
        // .#.#.
        // #..S.
        //
        // (2, 4) and (1, 4) are first queued along a detour, then reached
        // more cheaply up column 4; their older entries must be skipped.
        let maze = Maze::from_cells(&[
            vec![0, 0, 0, 0, 0],
            vec![0, 1, 1, 0, 0],
            vec![0, 1, 0, 0, 0],
            vec![0, 1, 0, 1, 0],
            vec![1, 0, 0, 0, 0],
        ])
        .unwrap();
        let start = Coord::new(4, 3);
        let goal = Coord::new(1, 0);
        let (path, stats) = astar_with_stats(&maze, start, goal);
        let path = path.unwrap();
        assert!(stats.stale >= 1);
        assert_eq!(path.len(), 11);
        assert_steps(&path);
        assert!(path.iter().all(|&c| maze.is_open(c)));
        assert_eq!(
            crate::bfs::bfs_map(&maze, &[start], i32::MAX).get(&goal),
            Some(&10)
        );
    }

    #[test]
    fn deterministic_across_calls() {
        let maze = Maze::new(6, 6).unwrap();
        let a = astar_path(&maze, Coord::new(0, 0), Coord::new(5, 5));
        let b = astar_path(&maze, Coord::new(0, 0), Coord::new(5, 5));
        assert_eq!(a, b);
    }
}
