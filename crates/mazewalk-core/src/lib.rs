//! **mazewalk-core** — grid types for maze exploration.
//!
//! This crate provides the foundational types used by the search engine:
//! geometry primitives ([`Point`], [`Range`], [`Dir`]), the open/blocked
//! [`Cell`], and the immutable [`Maze`] occupancy map with its target.

pub mod cell;
pub mod error;
pub mod geom;
pub mod maze;

pub use cell::Cell;
pub use error::MazeError;
pub use geom::{Dir, Point, Range};
pub use maze::Maze;
