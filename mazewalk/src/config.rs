//! Maze configuration: the grid, the start and the target.

use std::fs;
use std::path::{Path, PathBuf};

use mazewalk_core::{Maze, MazeError, Point};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid maze: {0}")]
    Maze(#[from] MazeError),
}

/// One maze exploration: `cells` holds rows of 0 (open) / 1 (blocked).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeConfig {
    pub cells: Vec<Vec<i32>>,
    pub start: Point,
    pub target: Point,
}

impl Default for MazeConfig {
    fn default() -> Self {
        Self {
            cells: vec![
                vec![0, 0, 0, 0, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 1, 1, 1, 1],
                vec![0, 0, 0, 0, 0, 0, 0, 0],
                vec![1, 1, 1, 1, 1, 0, 0, 0],
                vec![0, 0, 0, 0, 1, 0, 0, 0],
                vec![0, 0, 0, 0, 0, 0, 0, 0],
                vec![0, 0, 0, 0, 0, 0, 0, 0],
            ],
            start: Point::new(7, 0),
            target: Point::new(0, 7),
        }
    }
}

impl MazeConfig {
    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Validate into a maze and a usable start point.
    pub fn build(&self) -> Result<(Maze, Point), ConfigError> {
        let maze = Maze::new(&self.cells, self.target)?;
        maze.validate_start(self.start)?;
        Ok((maze, self.start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_builds() {
        let (maze, start) = MazeConfig::default().build().unwrap();
        assert_eq!(start, Point::new(7, 0));
        assert_eq!(maze.target(), Point::new(0, 7));
        assert_eq!(maze.rows(), 8);
        assert_eq!(maze.cols(), 8);
    }

    #[test]
    fn parses_json() {
        let cfg = MazeConfig::from_json_str(
            r#"{ "cells": [[0, 0], [1, 0]], "start": {"x": 0, "y": 0}, "target": {"x": 1, "y": 1} }"#,
        )
        .unwrap();
        assert_eq!(cfg.cells, vec![vec![0, 0], vec![1, 0]]);
        assert_eq!(cfg.start, Point::new(0, 0));
        assert_eq!(cfg.target, Point::new(1, 1));
        assert!(cfg.build().is_ok());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = MazeConfig::from_json_str(r#"{ "cells": [[0]] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn rejects_ragged_maze() {
        let cfg = MazeConfig {
            cells: vec![vec![0, 0], vec![0]],
            start: Point::new(0, 0),
            target: Point::new(0, 1),
        };
        let err = cfg.build().unwrap_err();
        assert!(matches!(err, ConfigError::Maze(MazeError::Ragged { row: 1, .. })));
        assert_eq!(
            err.to_string(),
            "invalid maze: row 1 has 1 cells, expected 2"
        );
    }

    #[test]
    fn rejects_bad_start() {
        let mut cfg = MazeConfig::default();
        cfg.start = Point::new(4, 0);
        assert!(matches!(
            cfg.build(),
            Err(ConfigError::Maze(MazeError::StartBlocked(_)))
        ));
        cfg.start = Point::new(8, 0);
        assert!(matches!(
            cfg.build(),
            Err(ConfigError::Maze(MazeError::StartOutOfBounds(_)))
        ));
    }

    #[test]
    fn missing_file_names_path() {
        let err = MazeConfig::load("/nonexistent/maze.json").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().starts_with("cannot read /nonexistent/maze.json"));
    }
}
