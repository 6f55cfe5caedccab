//! The [`Coord`] value type.

use crate::direction::Direction;
use std::fmt;

/// A grid cell identified by `(row, col)`.
///
/// Coordinates are signed so that cells one step outside the grid (the
/// border ring at row/col `-1`) are representable. Ordering is row-major,
/// which is also the canonical iteration order of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Coord {
    /// Row index, growing downwards.
    pub row: i32,
    /// Column index, growing rightwards.
    pub col: i32,
}

impl Coord {
    /// Create a coordinate.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell one step away in direction `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.offset();
        Self::new(self.row + dr, self.col + dc)
    }

    /// The four orthogonal neighbours, in [`Direction::ALL`] order.
    pub fn neighbours4(self) -> [Coord; 4] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// Manhattan (L1) distance.
    pub fn manhattan(self, other: Coord) -> u32 {
        (self.row - other.row).unsigned_abs() + (self.col - other.col).unsigned_abs()
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn step_follows_offsets() {
        let c = Coord::new(3, 4);
        assert_eq!(c.step(Direction::North), Coord::new(2, 4));
        assert_eq!(c.step(Direction::East), Coord::new(3, 5));
        assert_eq!(c.step(Direction::South), Coord::new(4, 4));
        assert_eq!(c.step(Direction::West), Coord::new(3, 3));
    }

    #[test]
    fn neighbours4_in_clockwise_order() {
        let n = Coord::new(0, 0).neighbours4();
        assert_eq!(
            n,
            [
                Coord::new(-1, 0),
                Coord::new(0, 1),
                Coord::new(1, 0),
                Coord::new(0, -1),
            ]
        );
    }

    #[test]
    fn ordering_is_row_major() {
        let mut cs = vec![Coord::new(1, 0), Coord::new(0, 2), Coord::new(0, 1)];
        cs.sort();
        assert_eq!(cs, vec![Coord::new(0, 1), Coord::new(0, 2), Coord::new(1, 0)]);
    }

    proptest! {
        #[test]
        fn step_then_reverse_is_identity(r in -50i32..50, c in -50i32..50, d in 0usize..4) {
            let dir = Direction::ALL[d];
            let start = Coord::new(r, c);
            prop_assert_eq!(start.step(dir).step(dir.reverse()), start);
        }

        #[test]
        fn neighbours_are_at_distance_one(r in -50i32..50, c in -50i32..50) {
            let start = Coord::new(r, c);
            for nb in start.neighbours4() {
                prop_assert_eq!(start.manhattan(nb), 1);
            }
        }
    }
}
