//! The [`Cell`] type — one square of the maze, open or blocked.

use std::fmt;

/// Occupancy of a single maze square.
///
/// Maze input encodes `0` as open and `1` as blocked; any other value is
/// rejected when the maze is built.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Open,
    Blocked,
}

impl Cell {
    /// Decode the integer map encoding. Returns `None` for anything but 0 or 1.
    #[inline]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Cell::Open),
            1 => Some(Cell::Blocked),
            _ => None,
        }
    }

    #[inline]
    pub const fn is_open(self) -> bool {
        matches!(self, Cell::Open)
    }
}

impl TryFrom<i32> for Cell {
    type Error = i32;

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        Cell::from_code(v).ok_or(v)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.is_open() { "." } else { "#" })
    }
}
