use mazepath_core::{Coord, Maze};

use crate::distance::manhattan;

/// Movement rules of a grid: which cells can be entered from a given cell.
pub trait Pather {
    /// Push every cell reachable in one move from `c` onto `buf`, which the
    /// search clears beforehand. [`Maze`] yields only in-bounds open cells,
    /// in the order up, down, left, right.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

/// Movement rules with a price per move.
pub trait WeightedPather: Pather {
    /// Price of stepping from `from` to the neighbor `to`; always positive.
    /// Every move through a [`Maze`] costs 1.
    fn cost(&self, from: Coord, to: Coord) -> i32;
}

/// Movement rules A* can search: prices plus a lower bound on the
/// remaining distance.
pub trait AstarPather: WeightedPather {
    /// Lower bound on the cost of reaching `to` from `from`.
    ///
    /// It must be consistent as well as admissible:
    /// `estimate(a, goal) <= cost(a, b) + estimate(b, goal)` for every move
    /// `a -> b`. A* closes a cell the first time it is expanded and skips
    /// later frontier entries for it, which is only correct under that
    /// bound. Manhattan distance satisfies it for unit cardinal moves.
    fn estimate(&self, from: Coord, to: Coord) -> i32;
}

// ---------------------------------------------------------------------------
// Maze: in-bounds open cardinal neighbors, unit cost, Manhattan estimate
// ---------------------------------------------------------------------------

impl Pather for Maze {
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        for n in c.neighbors_4() {
            if self.is_open(n) {
                buf.push(n);
            }
        }
    }
}

impl WeightedPather for Maze {
    #[inline]
    fn cost(&self, _from: Coord, _to: Coord) -> i32 {
        1
    }
}

impl AstarPather for Maze {
    #[inline]
    fn estimate(&self, from: Coord, to: Coord) -> i32 {
        manhattan(from, to)
    }
}
