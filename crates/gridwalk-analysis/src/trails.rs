//! Hiking trails on a topographic height map.
//!
//! A trail starts at height 0, ends at height 9, and climbs by exactly one
//! at every orthogonal step.

use gridwalk_core::{Coord, GridError};
use gridwalk_space::{flood_fill, Grid};

/// Height of a trailhead.
pub const TRAILHEAD: u8 = 0;
/// Height of a summit.
pub const SUMMIT: u8 = 9;

/// A grid whose labels are single-digit heights.
#[derive(Clone, Debug)]
pub struct HeightMap<'g> {
    grid: &'g Grid,
    heights: Vec<u8>,
}

impl<'g> HeightMap<'g> {
    /// Read every label of `grid` as a decimal digit.
    ///
    /// Returns `Err(GridError::InvalidLabel)` for the first non-digit.
    pub fn from_grid(grid: &'g Grid) -> Result<Self, GridError> {
        let heights = grid
            .cells()
            .map(|(coord, label)| {
                label
                    .to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(GridError::InvalidLabel { coord, label })
            })
            .collect::<Result<Vec<u8>, GridError>>()?;
        Ok(Self { grid, heights })
    }

    /// Height at `coord`, or `None` outside the grid.
    pub fn height(&self, coord: Coord) -> Option<u8> {
        self.grid.rank(coord).map(|i| self.heights[i])
    }

    /// Trailheads in row-major order.
    pub fn trailheads(&self) -> Vec<Coord> {
        self.grid
            .coords()
            .filter(|&c| self.height(c) == Some(TRAILHEAD))
            .collect()
    }

    fn climbs(&self, from: Coord, to: Coord) -> bool {
        match (self.height(from), self.height(to)) {
            (Some(a), Some(b)) => b == a + 1,
            _ => false,
        }
    }

    /// Number of distinct summits reachable from `head`.
    pub fn score(&self, head: Coord) -> usize {
        flood_fill(self.grid, head, |a, b| self.climbs(a, b))
            .into_iter()
            .filter(|&c| self.height(c) == Some(SUMMIT))
            .count()
    }

    /// Number of distinct trails starting at `head`.
    pub fn rating(&self, head: Coord) -> u64 {
        let counts = self.trail_counts();
        self.grid.rank(head).map_or(0, |i| counts[i])
    }

    /// Sum of [`score`](Self::score) over all trailheads.
    pub fn total_score(&self) -> usize {
        self.trailheads().into_iter().map(|h| self.score(h)).sum()
    }

    /// Sum of [`rating`](Self::rating) over all trailheads.
    pub fn total_rating(&self) -> u64 {
        let counts = self.trail_counts();
        self.trailheads()
            .into_iter()
            .filter_map(|h| self.grid.rank(h))
            .map(|i| counts[i])
            .sum()
    }

    /// For every cell, the number of climbing paths from it to any summit.
    ///
    /// Filled from the summits downwards so each cell only reads cells one
    /// level higher, which are already final.
    fn trail_counts(&self) -> Vec<u64> {
        let mut counts = vec![0u64; self.heights.len()];
        for level in (0..=SUMMIT).rev() {
            for coord in self.grid.coords() {
                let Some(i) = self.grid.rank(coord) else { continue };
                if self.heights[i] != level {
                    continue;
                }
                counts[i] = if level == SUMMIT {
                    1
                } else {
                    self.grid
                        .neighbours(coord)
                        .into_iter()
                        .filter(|&nb| self.climbs(coord, nb))
                        .filter_map(|nb| self.grid.rank(nb))
                        .map(|j| counts[j])
                        .sum()
                };
            }
        }
        counts
    }
}
