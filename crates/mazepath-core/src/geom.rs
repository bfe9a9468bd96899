//! Grid coordinates: [`Coord`].
//!
//! Rows grow downward and columns grow to the right, so `(0, 0)` is the
//! top-left cell of a maze.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A `(row, col)` address into a grid.
///
/// Signed so that neighbor offsets may step outside a grid; bounds are
/// checked by the grid, not by the coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// The four unit moves, in the order up, down, left, right.
    pub const CARDINALS: [Coord; 4] = [
        Coord::new(-1, 0),
        Coord::new(1, 0),
        Coord::new(0, -1),
        Coord::new(0, 1),
    ];

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four orthogonal neighbours (up, down, left, right).
    ///
    /// Some of them may lie outside any particular grid.
    #[inline]
    pub fn neighbors_4(self) -> [Coord; 4] {
        Self::CARDINALS.map(|d| self + d)
    }

    /// Whether `other` is exactly one orthogonal step away.
    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }
}

// --- trait impls for Coord ---

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coord> for (i32, i32) {
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn neighbors_in_fixed_order() {
        let c = Coord::new(2, 3);
        assert_eq!(
            c.neighbors_4(),
            [
                Coord::new(1, 3),
                Coord::new(3, 3),
                Coord::new(2, 2),
                Coord::new(2, 4),
            ]
        );
    }

    #[test]
    fn adjacency() {
        let c = Coord::new(0, 0);
        assert!(c.is_adjacent(Coord::new(0, 1)));
        assert!(c.is_adjacent(Coord::new(-1, 0)));
        assert!(!c.is_adjacent(Coord::new(1, 1)));
        assert!(!c.is_adjacent(c));
    }

    #[test]
    fn ordering_is_row_major() {
        let mut v = vec![Coord::new(1, 0), Coord::new(0, 5), Coord::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Coord::new(0, 1), Coord::new(0, 5), Coord::new(1, 0)]);
    }

    #[test]
    fn hash_by_value() {
        let mut set = HashSet::new();
        set.insert(Coord::new(4, 2));
        assert!(set.contains(&Coord::from((4, 2))));
        assert!(!set.contains(&Coord::new(2, 4)));
    }

    #[test]
    fn display() {
        assert_eq!(Coord::new(3, -1).to_string(), "(3, -1)");
    }

    #[test]
    fn arithmetic() {
        let a = Coord::new(1, 2);
        assert_eq!(a + Coord::new(1, 1), Coord::new(2, 3));
        assert_eq!(a - Coord::new(1, 1), Coord::new(0, 1));
        assert_eq!(a.shift(-1, 0), Coord::new(0, 2));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn coord_round_trip() {
        let c = Coord::new(3, 7);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"row":3,"col":7}"#);
        let back: Coord = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
