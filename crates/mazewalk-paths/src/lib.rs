//! Exhaustive path enumeration for grid mazes.
//!
//! This crate enumerates every simple path from a start cell to a maze's
//! target with a bound-pruned depth-first search, then aggregates the
//! shortest ones into a first-step distribution:
//!
//! - **Recursive DFS** ([`MazeSearch::search_from`], [`MazeSearch::search`])
//! - **Explicit-stack DFS** ([`MazeSearch::search_iterative`]), same results
//!   without consuming the call stack
//! - **First-step statistics** ([`summarize`])
//!
//! The search runs through [`MazeSearch`], which owns the shortest-length
//! bound for the duration of one top-level search.
//!
//! # Trait
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | both search engines |

mod bound;
mod distance;
mod iterative;
mod neighbors;
mod search;
mod summary;
mod traits;
mod visited;

pub use bound::ShortestBound;
pub use distance::manhattan;
pub use neighbors::Neighbors;
pub use search::{MazeSearch, SearchResult, SearchStats};
pub use summary::{FirstSteps, Outcome, summarize};
pub use traits::Pather;
pub use visited::{Trail, VisitedSet};
