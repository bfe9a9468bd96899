use mazepath_core::Coord;

/// Cached neighbor computation helper.
///
/// Enumerates the cardinal (4-way) neighbors of a grid coordinate in the
/// fixed order up, down, left, right, filtered by a predicate.
pub struct Neighbors {
    buf: Vec<Coord>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbors of `c`, keeping only those for which
    /// `keep` returns `true`.
    pub fn cardinal(&mut self, c: Coord, keep: impl Fn(Coord) -> bool) -> &[Coord] {
        self.buf.clear();
        for n in c.neighbors_4() {
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filters_and_keeps_order() {
        let mut nb = Neighbors::new();
        let got = nb.cardinal(Coord::new(0, 0), |c| c.row >= 0 && c.col >= 0);
        assert_eq!(got, &[Coord::new(1, 0), Coord::new(0, 1)]);
    }

    #[test]
    fn buffer_is_reused() {
        let mut nb = Neighbors::new();
        assert_eq!(nb.cardinal(Coord::new(5, 5), |_| true).len(), 4);
        assert!(nb.cardinal(Coord::new(5, 5), |_| false).is_empty());
    }
}
