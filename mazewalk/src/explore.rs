//! One exploration of a configured maze, from validation to printed text.

use std::error::Error;

use log::{debug, info};
use mazewalk_core::{Maze, Point};
use mazewalk_paths::{MazeSearch, SearchResult, manhattan, summarize};

use crate::config::MazeConfig;
use crate::options::Options;
use crate::output::render;

/// Run the engine `options` selects. The explicit-stack engine is the
/// default; recursion depth grows with path length.
pub fn search_with(
    search: &mut MazeSearch,
    maze: &Maze,
    start: Point,
    options: &Options,
) -> Vec<SearchResult> {
    if options.recursive {
        search.search_from(maze, start)
    } else {
        search.search_iterative(maze, start)
    }
}

/// Validate `config`, search it and render the outcome.
pub fn explore(config: &MazeConfig, options: &Options) -> Result<String, Box<dyn Error>> {
    let (maze, start) = config.build()?;
    debug!(
        "maze {}x{} ({} open), start {start}, target {}, lower bound {}\n{maze}",
        maze.rows(),
        maze.cols(),
        maze.open_count(),
        maze.target(),
        manhattan(start, maze.target())
    );

    let mut search = MazeSearch::new();
    let results = search_with(&mut search, &maze, start, options);
    info!(
        "{} paths reached the target, shortest {:?}, {:?}",
        results.len(),
        search.bound(),
        search.stats()
    );

    Ok(render(&summarize(&results))?)
}
