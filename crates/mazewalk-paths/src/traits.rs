use mazewalk_core::{Dir, Maze, Point};

/// Four-directional movement interface used by the search engines.
pub trait Pather {
    /// Whether a step from `p` in direction `dir` lands on an in-bounds,
    /// passable cell.
    fn can_move(&self, p: Point, dir: Dir) -> bool;

    /// Whether `p` is the goal.
    fn is_target(&self, p: Point) -> bool;
}

impl Pather for Maze {
    #[inline]
    fn can_move(&self, p: Point, dir: Dir) -> bool {
        Maze::can_move(self, p, dir)
    }

    #[inline]
    fn is_target(&self, p: Point) -> bool {
        Maze::is_target(self, p)
    }
}
