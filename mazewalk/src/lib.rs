//! mazewalk — print the first-step distribution over a maze's shortest paths.

pub mod config;
pub mod explore;
pub mod options;
pub mod output;

pub use config::{ConfigError, MazeConfig};
pub use explore::{explore, search_with};
pub use options::Options;
pub use output::render;
