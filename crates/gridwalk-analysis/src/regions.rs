//! Same-label regions and their boundary measurements.

use gridwalk_core::{Coord, Direction};
use gridwalk_space::{components, Grid};
use indexmap::IndexSet;

/// A maximal 4-connected set of cells sharing one label.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    label: char,
    cells: IndexSet<Coord>,
}

impl Region {
    /// The shared label.
    pub fn label(&self) -> char {
        self.label
    }

    /// Member cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells.iter().copied()
    }

    /// `true` if `coord` belongs to the region.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// Number of cells.
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Number of unit cell edges that face a cell outside the region.
    pub fn perimeter(&self) -> usize {
        self.cells()
            .map(|c| {
                c.neighbours4()
                    .iter()
                    .filter(|&&nb| !self.contains(nb))
                    .count()
            })
            .sum()
    }

    /// Number of straight boundary segments, inner holes included.
    ///
    /// A closed rectilinear boundary has as many sides as corners, so this
    /// counts corners: at each cell, for each pair of adjacent headings, a
    /// convex corner has both orthogonal neighbours outside, and a concave
    /// corner has both inside with the diagonal outside.
    pub fn sides(&self) -> usize {
        let mut corners = 0;
        for cell in self.cells() {
            for dir in Direction::ALL {
                let turned = dir.turn_right();
                let a = self.contains(cell.step(dir));
                let b = self.contains(cell.step(turned));
                let diagonal = self.contains(cell.step(dir).step(turned));
                if (!a && !b) || (a && b && !diagonal) {
                    corners += 1;
                }
            }
        }
        corners
    }
}

/// Partition `grid` into regions, ordered by their first cell.
pub fn regions(grid: &Grid) -> Vec<Region> {
    components(grid, |a, b| grid.get(a) == grid.get(b))
        .into_iter()
        .filter_map(|cells| {
            let label = grid.get(*cells.first()?)?;
            Some(Region {
                label,
                cells: cells.into_iter().collect(),
            })
        })
        .collect()
}

/// Σ area × perimeter over all regions.
pub fn fence_price(grid: &Grid) -> u64 {
    regions(grid)
        .iter()
        .map(|r| (r.area() * r.perimeter()) as u64)
        .sum()
}

/// Σ area × sides over all regions.
pub fn bulk_fence_price(grid: &Grid) -> u64 {
    regions(grid)
        .iter()
        .map(|r| (r.area() * r.sides()) as u64)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_is_a_square() {
        let g = Grid::parse("A").unwrap();
        let rs = regions(&g);
        assert_eq!(rs.len(), 1);
        assert_eq!(rs[0].label(), 'A');
        assert_eq!((rs[0].area(), rs[0].perimeter(), rs[0].sides()), (1, 4, 4));
    }

    #[test]
    fn small_garden() {
        let g = Grid::parse("AAAA\nBBCD\nBBCC\nEEEC").unwrap();
        let rs = regions(&g);
        let summary: Vec<(char, usize, usize, usize)> = rs
            .iter()
            .map(|r| (r.label(), r.area(), r.perimeter(), r.sides()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ('A', 4, 10, 4),
                ('B', 4, 8, 4),
                ('C', 4, 10, 8),
                ('D', 1, 4, 4),
                ('E', 3, 8, 4),
            ]
        );
        assert_eq!(fence_price(&g), 140);
        assert_eq!(bulk_fence_price(&g), 80);
    }

    #[test]
    fn holes_add_sides() {
        let g = Grid::parse("OOOOO\nOXOXO\nOOOOO\nOXOXO\nOOOOO").unwrap();
        assert_eq!(fence_price(&g), 772);
        assert_eq!(bulk_fence_price(&g), 436);
    }

    #[test]
    fn diagonal_touch_counts_both_corners() {
        let g = Grid::parse("AAAAAA\nAAABBA\nAAABBA\nABBAAA\nABBAAA\nAAAAAA").unwrap();
        assert_eq!(bulk_fence_price(&g), 368);
    }

    #[test]
    fn same_label_apart_is_two_regions() {
        let g = Grid::parse("ABA").unwrap();
        let rs = regions(&g);
        assert_eq!(rs.len(), 3);
        assert_eq!(rs[0].label(), rs[2].label());
        assert!(!rs[0].contains(Coord::new(0, 2)));
    }
}
