//! Breadth-first flood fill over the 4-neighbourhood.

use crate::grid::Grid;
use gridwalk_core::Coord;
use std::collections::VecDeque;

/// All cells reachable from `start` by steps `from -> to` for which
/// `connected(from, to)` holds, sorted in row-major order.
///
/// `connected` is only asked about interior neighbour pairs. It need not be
/// symmetric, so directed walks (e.g. strictly ascending heights) work too.
/// Returns an empty vector if `start` is outside the grid.
pub fn flood_fill(
    grid: &Grid,
    start: Coord,
    connected: impl Fn(Coord, Coord) -> bool,
) -> Vec<Coord> {
    let Some(start_rank) = grid.rank(start) else {
        return Vec::new();
    };
    let mut visited = vec![false; grid.cell_count()];
    let mut queue = VecDeque::new();
    let mut result = Vec::new();

    visited[start_rank] = true;
    queue.push_back(start);
    result.push(start);

    while let Some(cell) = queue.pop_front() {
        for nb in grid.neighbours(cell) {
            let Some(i) = grid.rank(nb) else { continue };
            if !visited[i] && connected(cell, nb) {
                visited[i] = true;
                queue.push_back(nb);
                result.push(nb);
            }
        }
    }

    // Sort in row-major canonical order.
    result.sort();
    result
}

/// Partition the grid into connected components under a symmetric
/// `connected` predicate.
///
/// Components are returned in the row-major order of their first cell;
/// each component's cells are themselves row-major.
pub fn components(grid: &Grid, connected: impl Fn(Coord, Coord) -> bool) -> Vec<Vec<Coord>> {
    let mut assigned = vec![false; grid.cell_count()];
    let mut out = Vec::new();
    for coord in grid.coords() {
        let Some(i) = grid.rank(coord) else { continue };
        if assigned[i] {
            continue;
        }
        let component = flood_fill(grid, coord, &connected);
        for &cell in &component {
            if let Some(j) = grid.rank(cell) {
                assigned[j] = true;
            }
        }
        out.push(component);
    }
    out
}
