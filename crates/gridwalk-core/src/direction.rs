//! The four orthogonal headings and their rotation table.

use std::fmt;

/// Cardinal heading of a walking agent.
///
/// Rows grow downwards, so `North` is `(row - 1)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// Move one cell north (row - 1).
    North = 0,
    /// Move one cell east (col + 1).
    East = 1,
    /// Move one cell south (row + 1).
    South = 2,
    /// Move one cell west (col - 1).
    West = 3,
}

impl Direction {
    /// All headings in clockwise order, starting at north.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the `(row_offset, col_offset)` for this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// The next heading in clockwise order.
    pub fn turn_right(self) -> Self {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// The next heading in counter-clockwise order.
    pub fn turn_left(self) -> Self {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// The opposite heading.
    pub fn reverse(self) -> Self {
        self.turn_right().turn_right()
    }

    /// Parse the conventional arrow markers `^`, `>`, `v`, `<`.
    ///
    /// ```
    /// use gridwalk_core::Direction;
    ///
    /// assert_eq!(Direction::from_marker('^'), Some(Direction::North));
    /// assert_eq!(Direction::from_marker('<'), Some(Direction::West));
    /// assert_eq!(Direction::from_marker('#'), None);
    /// ```
    pub fn from_marker(marker: char) -> Option<Self> {
        match marker {
            '^' => Some(Direction::North),
            '>' => Some(Direction::East),
            'v' | 'V' => Some(Direction::South),
            '<' => Some(Direction::West),
            _ => None,
        }
    }

    /// Index of this heading within [`Direction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        };
        f.write_str(name)
    }
}
