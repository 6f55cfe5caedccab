//! Rectangular label grid with an implicit border ring.

use crate::obstruction::ObstructionSet;
use gridwalk_core::{Coord, GridError};
use smallvec::SmallVec;
use std::fmt;

/// An immutable two-dimensional array of cell labels.
///
/// Each cell has coordinate `(row, col)` where `0 <= row < rows` and
/// `0 <= col < cols`. Labels are stored flat in row-major order.
///
/// The grid behaves as if padded by one sentinel cell on every side: those
/// padding coordinates are the *border* ([`is_border`](Self::is_border)).
#[derive(Clone, PartialEq, Eq)]
pub struct Grid {
    rows: u32,
    cols: u32,
    cells: Vec<char>,
}

impl Grid {
    /// Parse a block of text, one character per cell, rows separated by
    /// line breaks.
    ///
    /// Leading and trailing blank lines are ignored, and `\r\n` endings are
    /// accepted. Returns `Err(GridError::EmptyGrid)` if nothing remains and
    /// `Err(GridError::Ragged)` if rows differ in length.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridwalk_space::Grid;
    /// use gridwalk_core::Coord;
    ///
    /// let grid = Grid::parse("..#\n.^.\n").unwrap();
    /// assert_eq!((grid.rows(), grid.cols()), (2, 3));
    /// assert_eq!(grid.get(Coord::new(0, 2)), Some('#'));
    /// assert!(grid.is_border(Coord::new(-1, 0)));
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text.lines().collect();
        let first = lines.iter().position(|l| !l.trim().is_empty());
        let last = lines.iter().rposition(|l| !l.trim().is_empty());
        let rows = match (first, last) {
            (Some(lo), Some(hi)) => lines[lo..=hi]
                .iter()
                .map(|l| l.chars().collect())
                .collect(),
            _ => Vec::new(),
        };
        Self::from_rows(rows)
    }

    /// Build a grid from explicit rows of labels.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Result<Self, GridError> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        if expected == 0 {
            return Err(GridError::EmptyGrid);
        }
        for (row, labels) in rows.iter().enumerate() {
            if labels.len() != expected {
                return Err(GridError::Ragged {
                    row,
                    expected,
                    found: labels.len(),
                });
            }
        }
        Ok(Self {
            rows: rows.len() as u32,
            cols: expected as u32,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Total number of interior cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// `true` if `coord` is an interior cell.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as u32) < self.rows
            && (coord.col as u32) < self.cols
    }

    /// `true` if `coord` lies on the ring just outside the grid.
    pub fn is_border(&self, coord: Coord) -> bool {
        let rows = self.rows as i32;
        let cols = self.cols as i32;
        !self.contains(coord)
            && (-1..=rows).contains(&coord.row)
            && (-1..=cols).contains(&coord.col)
    }

    /// Position of `coord` in the row-major ordering, or `None` if it is
    /// not an interior cell.
    pub fn rank(&self, coord: Coord) -> Option<usize> {
        if !self.contains(coord) {
            return None;
        }
        Some(coord.row as usize * self.cols as usize + coord.col as usize)
    }

    /// Label at `coord`, or `None` outside the grid.
    pub fn get(&self, coord: Coord) -> Option<char> {
        self.rank(coord).map(|i| self.cells[i])
    }

    /// All interior coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let cols = self.cols as i32;
        (0..self.rows as i32).flat_map(move |r| (0..cols).map(move |c| Coord::new(r, c)))
    }

    /// All `(coord, label)` pairs in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, char)> + '_ {
        self.coords().zip(self.cells.iter().copied())
    }

    /// Every border coordinate, clockwise from the top-left corner.
    pub fn border(&self) -> impl Iterator<Item = Coord> {
        let rows = self.rows as i32;
        let cols = self.cols as i32;
        let top = (-1..=cols).map(move |c| Coord::new(-1, c));
        let right = (0..rows).map(move |r| Coord::new(r, cols));
        let bottom = (-1..=cols).rev().map(move |c| Coord::new(rows, c));
        let left = (0..rows).rev().map(move |r| Coord::new(r, -1));
        top.chain(right).chain(bottom).chain(left)
    }

    /// Coordinates of every cell carrying `label`, in row-major order.
    pub fn positions_of(&self, label: char) -> Vec<Coord> {
        self.cells()
            .filter(|&(_, l)| l == label)
            .map(|(c, _)| c)
            .collect()
    }

    /// The single cell carrying `marker`.
    ///
    /// Returns `Err(GridError::MissingStart)` if the marker is absent and
    /// `Err(GridError::DuplicateStart)` if it appears more than once.
    pub fn find_unique(&self, marker: char) -> Result<Coord, GridError> {
        match self.positions_of(marker).as_slice() {
            [] => Err(GridError::MissingStart { marker }),
            [only] => Ok(*only),
            many => Err(GridError::DuplicateStart {
                marker,
                count: many.len(),
            }),
        }
    }

    /// Interior 4-connected neighbours of `coord`, in clockwise order
    /// starting north. Cells on the grid edge have fewer neighbours.
    pub fn neighbours(&self, coord: Coord) -> SmallVec<[Coord; 4]> {
        coord
            .neighbours4()
            .into_iter()
            .filter(|&nb| self.contains(nb))
            .collect()
    }

    /// Collect every interior cell whose label satisfies `is_obstruction`.
    pub fn obstructions(&self, is_obstruction: impl Fn(char) -> bool) -> ObstructionSet {
        self.cells()
            .filter(|&(_, l)| is_obstruction(l))
            .map(|(c, _)| c)
            .collect()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("rows", &self.rows)
            .field("cols", &self.cols)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.cols as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &label in row {
                write!(f, "{label}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn c(r: i32, col: i32) -> Coord {
        Coord::new(r, col)
    }

    // ── Parsing tests ───────────────────────────────────────────

    #[test]
    fn parse_ignores_surrounding_blank_lines() {
        let g = Grid::parse("\n\n.#.\n...\n\n").unwrap();
        assert_eq!((g.rows(), g.cols()), (2, 3));
        assert_eq!(g.get(c(0, 1)), Some('#'));
    }

    #[test]
    fn parse_accepts_crlf() {
        let g = Grid::parse(".#\r\n#.\r\n").unwrap();
        assert_eq!((g.rows(), g.cols()), (2, 2));
        assert_eq!(g.to_string(), ".#\n#.");
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        assert_eq!(
            Grid::parse("...\n..\n..."),
            Err(GridError::Ragged {
                row: 1,
                expected: 3,
                found: 2,
            })
        );
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert_eq!(Grid::parse(""), Err(GridError::EmptyGrid));
        assert_eq!(Grid::parse("\n  \n"), Err(GridError::EmptyGrid));
    }

    #[test]
    fn from_rows_rejects_empty_first_row() {
        assert_eq!(Grid::from_rows(vec![vec![]]), Err(GridError::EmptyGrid));
    }

    // ── Border tests ────────────────────────────────────────────

    #[test]
    fn border_ring_surrounds_interior() {
        let g = Grid::parse("...\n...").unwrap();
        assert!(g.is_border(c(-1, -1)));
        assert!(g.is_border(c(2, 3)));
        assert!(g.is_border(c(0, 3)));
        assert!(!g.is_border(c(0, 0)));
        assert!(!g.is_border(c(-2, 0)));
        assert!(!g.is_border(c(0, 4)));
    }

    #[test]
    fn border_iterator_has_ring_length() {
        let g = Grid::parse("....\n....\n....").unwrap();
        let ring: Vec<Coord> = g.border().collect();
        // (rows + 2) * (cols + 2) - rows * cols
        assert_eq!(ring.len(), 5 * 6 - 12);
        assert_eq!(ring[0], c(-1, -1));
        assert!(ring.iter().all(|&b| g.is_border(b)));
    }

    // ── Lookup tests ────────────────────────────────────────────

    #[test]
    fn find_unique_reports_missing_and_duplicate() {
        let g = Grid::parse("^.\n..").unwrap();
        assert_eq!(g.find_unique('^'), Ok(c(0, 0)));
        assert_eq!(
            g.find_unique('>'),
            Err(GridError::MissingStart { marker: '>' })
        );

        let g = Grid::parse("^.\n.^").unwrap();
        assert_eq!(
            g.find_unique('^'),
            Err(GridError::DuplicateStart {
                marker: '^',
                count: 2,
            })
        );
    }

    #[test]
    fn rank_is_row_major() {
        let g = Grid::parse("....\n....\n....").unwrap();
        assert_eq!(g.rank(c(0, 0)), Some(0));
        assert_eq!(g.rank(c(1, 2)), Some(6));
        assert_eq!(g.rank(c(2, 3)), Some(11));
        assert_eq!(g.rank(c(3, 0)), None);
        assert_eq!(g.rank(c(0, -1)), None);
    }

    #[test]
    fn neighbours_absorb_at_edges() {
        let g = Grid::parse(".....\n.....\n.....\n.....\n.....").unwrap();
        assert_eq!(g.neighbours(c(2, 2)).len(), 4);
        assert_eq!(g.neighbours(c(0, 2)).len(), 3);
        assert_eq!(g.neighbours(c(0, 0)).len(), 2);
    }

    #[test]
    fn single_cell_has_no_neighbours() {
        let g = Grid::parse("x").unwrap();
        assert!(g.neighbours(c(0, 0)).is_empty());
        assert_eq!(g.border().count(), 8);
    }

    #[test]
    fn obstructions_follow_predicate() {
        let g = Grid::parse("#.#\n.^.\n#..").unwrap();
        let obs = g.obstructions(|l| l == '#');
        assert_eq!(obs.len(), 3);
        assert!(obs.contains(c(0, 0)));
        assert!(obs.contains(c(2, 0)));
        assert!(!obs.contains(c(1, 1)));
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_square() {
        let g = Grid::parse("........\n".repeat(8).as_str()).unwrap();
        compliance::run_full_compliance(&g);
    }

    #[test]
    fn compliance_thin() {
        compliance::run_full_compliance(&Grid::parse("a\nb\nc").unwrap());
        compliance::run_full_compliance(&Grid::parse("abcde").unwrap());
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn step_from_interior_is_interior_or_border(
            rows in 1usize..12,
            cols in 1usize..12,
            r in 0i32..12,
            col in 0i32..12,
            d in 0usize..4,
        ) {
            let g = Grid::from_rows(vec![vec!['.'; cols]; rows]).unwrap();
            let from = c(r % rows as i32, col % cols as i32);
            let to = from.step(gridwalk_core::Direction::ALL[d]);
            prop_assert!(g.contains(to) != g.is_border(to));
        }
    }
}
