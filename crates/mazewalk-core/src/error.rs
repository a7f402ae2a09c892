//! Construction-time validation errors.

use thiserror::Error;

use crate::geom::Point;

/// Why a maze (or a start point on it) was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    #[error("maze has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell at row {row}, column {col} has value {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: i32 },
    #[error("maze of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },
    #[error("cell buffer holds {found} cells, expected {expected}")]
    CellCount { expected: usize, found: usize },
    #[error("target {0} is outside the maze")]
    TargetOutOfBounds(Point),
    #[error("start {0} is outside the maze")]
    StartOutOfBounds(Point),
    #[error("start {0} is a blocked cell")]
    StartBlocked(Point),
}
