//! The [`Maze`] type — an immutable occupancy map with a target cell.
//!
//! Cells are stored row-major in a flat buffer. Every query checks bounds
//! before indexing, so asking about a neighbour past the edge yields
//! `false` rather than a panic.

use std::fmt;

use crate::cell::Cell;
use crate::error::MazeError;
use crate::geom::{Dir, Point, Range};

/// A fixed `rows × cols` maze of open and blocked cells plus a target.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Maze {
    cells: Vec<Cell>,
    bounds: Range,
    target: Point,
}

impl Maze {
    /// Build a maze from rows of `0` (open) / `1` (blocked) values.
    ///
    /// Fails if there are no cells, if rows differ in length, if a value is
    /// neither 0 nor 1, or if `target` lies outside the maze.
    pub fn new<R: AsRef<[i32]>>(rows: &[R], target: Point) -> Result<Self, MazeError> {
        let cols = rows.first().map(|r| r.as_ref().len()).unwrap_or(0);
        if cols == 0 {
            return Err(MazeError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != cols {
                return Err(MazeError::Ragged {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                let cell = Cell::try_from(value)
                    .map_err(|value| MazeError::InvalidCell { row, col, value })?;
                cells.push(cell);
            }
        }

        Self::from_cells(rows.len(), cols, cells, target)
    }

    /// Build a maze from a flat row-major cell buffer.
    ///
    /// Fails with [`MazeError::TooLarge`] if either side does not fit the
    /// `i32` coordinates of [`Point`].
    pub fn from_cells(
        rows: usize,
        cols: usize,
        cells: Vec<Cell>,
        target: Point,
    ) -> Result<Self, MazeError> {
        let bounds = Self::checked_bounds(rows, cols)?;
        if cells.len() != rows * cols {
            return Err(MazeError::CellCount {
                expected: rows * cols,
                found: cells.len(),
            });
        }
        if !bounds.contains(target) {
            return Err(MazeError::TargetOutOfBounds(target));
        }
        Ok(Self {
            cells,
            bounds,
            target,
        })
    }

    /// An all-open maze of the given size.
    pub fn open(rows: usize, cols: usize, target: Point) -> Result<Self, MazeError> {
        Self::checked_bounds(rows, cols)?;
        Self::from_cells(rows, cols, vec![Cell::Open; rows * cols], target)
    }

    // Both sides must fit in `i32` coordinates and the cell count in `usize`.
    fn checked_bounds(rows: usize, cols: usize) -> Result<Range, MazeError> {
        if rows == 0 || cols == 0 {
            return Err(MazeError::Empty);
        }
        let too_large = || MazeError::TooLarge { rows, cols };
        let r = i32::try_from(rows).map_err(|_| too_large())?;
        let c = i32::try_from(cols).map_err(|_| too_large())?;
        rows.checked_mul(cols).ok_or_else(too_large)?;
        Ok(Range::new(0, 0, r, c))
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some(p.x as usize * self.cols() + p.y as usize)
    }

    /// The bounding range `[(0, 0), (rows, cols))`.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.bounds.rows() as usize
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.bounds.cols() as usize
    }

    #[inline]
    pub fn target(&self) -> Point {
        self.target
    }

    /// Whether `p` is inside the maze.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// Whether `p` is in bounds and open.
    #[inline]
    pub fn is_open(&self, p: Point) -> bool {
        matches!(self.at(p), Some(Cell::Open))
    }

    /// Number of open cells.
    pub fn open_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_open()).count()
    }

    /// Whether `p` is exactly the target.
    #[inline]
    pub fn is_target(&self, p: Point) -> bool {
        p == self.target
    }

    /// Whether the neighbour of `p` in direction `dir` exists and is open.
    ///
    /// Returns `false` at the maze edge (no wraparound) and for a `p` that is
    /// itself outside the maze.
    #[inline]
    pub fn can_move(&self, p: Point, dir: Dir) -> bool {
        self.contains(p) && self.is_open(p.step(dir))
    }

    #[inline]
    pub fn can_move_up(&self, p: Point) -> bool {
        self.can_move(p, Dir::Up)
    }

    #[inline]
    pub fn can_move_right(&self, p: Point) -> bool {
        self.can_move(p, Dir::Right)
    }

    #[inline]
    pub fn can_move_down(&self, p: Point) -> bool {
        self.can_move(p, Dir::Down)
    }

    #[inline]
    pub fn can_move_left(&self, p: Point) -> bool {
        self.can_move(p, Dir::Left)
    }

    /// Check that `start` is a usable starting point: in bounds and open.
    pub fn validate_start(&self, start: Point) -> Result<(), MazeError> {
        match self.at(start) {
            None => Err(MazeError::StartOutOfBounds(start)),
            Some(Cell::Blocked) => Err(MazeError::StartBlocked(start)),
            Some(Cell::Open) => Ok(()),
        }
    }

    /// Row-major iterator over `(Point, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (p, cell) in self.iter() {
            if p == self.target {
                f.write_str("T")?;
            } else {
                write!(f, "{cell}")?;
            }
            if p.y as usize == self.cols() - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
