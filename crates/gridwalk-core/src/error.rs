//! Error types for grid construction and traversal.

use crate::coord::Coord;
use crate::state::SimState;
use std::error::Error;
use std::fmt;

/// Errors arising from grid parsing, simulator construction, or a walk
/// that cannot finish.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The input contained no cells.
    EmptyGrid,
    /// A row's length differs from the first row's.
    Ragged {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// The start marker does not appear in the grid.
    MissingStart {
        /// The marker that was searched for.
        marker: char,
    },
    /// The start marker appears more than once.
    DuplicateStart {
        /// The marker that was searched for.
        marker: char,
        /// Number of occurrences.
        count: usize,
    },
    /// The start position is not strictly inside the grid.
    StartNotInterior {
        /// The offending coordinate.
        coord: Coord,
    },
    /// The start position is itself an obstruction.
    StartObstructed {
        /// The offending coordinate.
        coord: Coord,
    },
    /// A cell label could not be interpreted.
    InvalidLabel {
        /// Where the label was found.
        coord: Coord,
        /// The label.
        label: char,
    },
    /// The walk revisited a state without ever reaching the border.
    Looped {
        /// The first repeated state.
        state: SimState,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid is not rectangular: row {row} has {found} cells, expected {expected}"
            ),
            Self::MissingStart { marker } => {
                write!(f, "start marker '{marker}' not found")
            }
            Self::DuplicateStart { marker, count } => {
                write!(f, "start marker '{marker}' appears {count} times, expected once")
            }
            Self::StartNotInterior { coord } => {
                write!(f, "start position {coord} is outside the grid")
            }
            Self::StartObstructed { coord } => {
                write!(f, "start position {coord} is obstructed")
            }
            Self::InvalidLabel { coord, label } => {
                write!(f, "invalid label '{label}' at {coord}")
            }
            Self::Looped { state } => {
                write!(f, "walk never leaves the grid: state {state} repeats")
            }
        }
    }
}

impl Error for GridError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn display_messages_name_the_problem() {
        let e = GridError::Ragged {
            row: 2,
            expected: 10,
            found: 9,
        };
        assert_eq!(
            e.to_string(),
            "grid is not rectangular: row 2 has 9 cells, expected 10"
        );

        let e = GridError::DuplicateStart {
            marker: '^',
            count: 2,
        };
        assert!(e.to_string().contains("appears 2 times"));

        let e = GridError::Looped {
            state: SimState::new(Coord::new(1, 2), Direction::East),
        };
        assert_eq!(
            e.to_string(),
            "walk never leaves the grid: state (1, 2) facing east repeats"
        );
    }
}
