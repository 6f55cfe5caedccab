//! Impassable cells of a grid.

use gridwalk_core::Coord;
use indexmap::IndexSet;

/// The set of coordinates an agent cannot enter.
///
/// Derived once from a [`Grid`](crate::Grid) and never mutated in place;
/// [`with`](Self::with) returns a copy with one extra obstruction, which is
/// how counterfactual searches build their per-candidate sets.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ObstructionSet {
    cells: IndexSet<Coord>,
}

impl ObstructionSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if `coord` is obstructed.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Number of obstructed cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// `true` if nothing is obstructed.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// A copy of this set with `coord` added.
    pub fn with(&self, coord: Coord) -> Self {
        let mut cells = self.cells.clone();
        cells.insert(coord);
        Self { cells }
    }

    /// Obstructed cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }
}

impl FromIterator<Coord> for ObstructionSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_leaves_original_untouched() {
        let base: ObstructionSet = [Coord::new(0, 0)].into_iter().collect();
        let extended = base.with(Coord::new(1, 1));
        assert_eq!(base.len(), 1);
        assert_eq!(extended.len(), 2);
        assert!(extended.contains(Coord::new(1, 1)));
        assert!(!base.contains(Coord::new(1, 1)));
    }

    #[test]
    fn with_existing_cell_is_noop() {
        let base: ObstructionSet = [Coord::new(2, 3)].into_iter().collect();
        assert_eq!(base.with(Coord::new(2, 3)), base);
    }

    #[test]
    fn iter_preserves_insertion_order() {
        let set: ObstructionSet = [Coord::new(3, 0), Coord::new(0, 3)].into_iter().collect();
        let cells: Vec<Coord> = set.iter().collect();
        assert_eq!(cells, vec![Coord::new(3, 0), Coord::new(0, 3)]);
    }
}
