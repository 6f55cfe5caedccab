//! Grid invariant test helpers.
//!
//! These functions verify that a [`Grid`] satisfies the structural
//! invariants traversals rely on. Reused across the grid test module.

use crate::grid::Grid;
use gridwalk_core::Direction;
use indexmap::IndexSet;

/// Assert that `coords()` returns exactly `cell_count` unique, in-bounds
/// coordinates in ascending row-major order.
pub fn assert_coords_complete(grid: &Grid) {
    let coords: Vec<_> = grid.coords().collect();
    assert_eq!(
        coords.len(),
        grid.cell_count(),
        "coords() length ({}) != cell_count ({})",
        coords.len(),
        grid.cell_count()
    );
    let unique: IndexSet<_> = coords.iter().collect();
    assert_eq!(unique.len(), grid.cell_count(), "coords() has duplicates");
    assert!(
        coords.windows(2).all(|w| w[0] < w[1]),
        "coords() is not row-major"
    );
}

/// Assert that `rank(coords()[i]) == i` for every interior cell.
pub fn assert_rank_matches_ordering(grid: &Grid) {
    for (i, coord) in grid.coords().enumerate() {
        assert_eq!(grid.rank(coord), Some(i), "rank({coord:?}) != {i}");
    }
}

/// Assert that `b in neighbours(a)` implies `a in neighbours(b)`.
pub fn assert_neighbours_symmetric(grid: &Grid) {
    for coord in grid.coords() {
        for nb in grid.neighbours(coord) {
            assert!(
                grid.neighbours(nb).contains(&coord),
                "neighbour symmetry violated: {nb:?} in N({coord:?}) but {coord:?} not in N({nb:?})"
            );
        }
    }
}

/// Assert that one step from any interior cell lands either in the
/// interior or on the border, never both and never neither.
pub fn assert_border_partition(grid: &Grid) {
    for coord in grid.coords() {
        assert!(!grid.is_border(coord), "{coord:?} is both interior and border");
        for dir in Direction::ALL {
            let next = coord.step(dir);
            assert!(
                grid.contains(next) ^ grid.is_border(next),
                "step {dir} from {coord:?} reached {next:?}, neither interior nor border"
            );
        }
    }
    for b in grid.border() {
        assert!(grid.is_border(b), "border() yielded non-border {b:?}");
    }
    let ring: IndexSet<_> = grid.border().collect();
    let expected = (grid.rows() as usize + 2) * (grid.cols() as usize + 2) - grid.cell_count();
    assert_eq!(ring.len(), expected, "border ring size mismatch");
}

/// Run all grid compliance checks.
pub fn run_full_compliance(grid: &Grid) {
    assert_coords_complete(grid);
    assert_rank_matches_ordering(grid);
    assert_neighbours_symmetric(grid);
    assert_border_partition(grid);
}
