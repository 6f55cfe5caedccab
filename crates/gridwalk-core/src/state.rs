//! The unit of cycle detection.

use crate::coord::Coord;
use crate::direction::Direction;
use std::fmt;

/// An agent's `(position, facing)` pair.
///
/// The walk is deterministic in this pair alone, so a repeated `SimState`
/// proves the walk is periodic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SimState {
    /// Current cell.
    pub position: Coord,
    /// Current heading.
    pub facing: Direction,
}

impl SimState {
    /// Create a state.
    pub const fn new(position: Coord, facing: Direction) -> Self {
        Self { position, facing }
    }

    /// The cell directly ahead.
    pub fn ahead(&self) -> Coord {
        self.position.step(self.facing)
    }
}

impl fmt::Display for SimState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facing {}", self.position, self.facing)
    }
}
